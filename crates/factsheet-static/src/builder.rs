//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use factsheet_content::ContentStore;

use crate::assets::{self, AssetError};
use crate::config::Configuration;
use crate::templates::{Bindings, TemplateEngine, TemplateError};

/// Name of the asset directory inside the output directory.
pub const STATIC_DIR_NAME: &str = "static";

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the templates
    pub template_dir: PathBuf,

    /// Top-level template to render
    pub template: String,

    /// Static assets source directory (optional on disk)
    pub static_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Rendered file name, relative to the output directory
    pub output_file: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            template: "index.html".to_string(),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("dist"),
            output_file: PathBuf::from("index.html"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of ordered records rendered
    pub records: usize,

    /// Number of auxiliary records available to the template
    pub auxiliary: usize,

    /// Number of asset files copied
    pub assets: usize,

    /// Path of the rendered page
    pub output_file: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to publish assets: {0}")]
    AssetError(#[from] AssetError),

    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("Failed to write output: {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    store: ContentStore,
    site: Configuration,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, store: ContentStore, site: Configuration) -> Self {
        Self {
            config,
            store,
            site,
        }
    }

    /// Build the site: prepare directories, publish assets, render, write.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output and static directories exist
        let static_out = self.config.output_dir.join(STATIC_DIR_NAME);
        fs::create_dir_all(&static_out).map_err(|e| BuildError::WriteError {
            path: static_out.display().to_string(),
            message: e.to_string(),
        })?;

        // Copy static assets
        let report = assets::publish(&self.config.static_dir, &static_out)?;
        if !report.skipped {
            tracing::info!(
                "Copied {} assets from {}",
                report.files,
                self.config.static_dir.display()
            );
        }

        // Render the page
        let templates = TemplateEngine::from_dir(&self.config.template_dir)?;
        let html = templates.render(
            &self.config.template,
            &Bindings::new(&self.store, &self.site),
        )?;

        // Write output
        let output_file = self.config.output_dir.join(&self.config.output_file);
        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
        fs::write(&output_file, html).map_err(|e| BuildError::WriteError {
            path: output_file.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(BuildResult {
            records: self.store.records().len(),
            auxiliary: self.store.auxiliary().len(),
            assets: report.files,
            output_file,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::DEFAULT_INDEX_TEMPLATE;
    use factsheet_content::ContentRecord;
    use std::path::Path;
    use tempfile::tempdir;

    fn site(root: &Path, template: &str) -> BuildConfig {
        let templates = root.join("templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("index.html"), template).unwrap();

        BuildConfig {
            template_dir: templates,
            static_dir: root.join("static"),
            output_dir: root.join("dist"),
            ..Default::default()
        }
    }

    #[test]
    fn builds_builtin_site() {
        let temp = tempdir().unwrap();
        let config = site(temp.path(), DEFAULT_INDEX_TEMPLATE);

        let builder = StaticBuilder::new(
            config,
            ContentStore::builtin().unwrap(),
            Configuration::default(),
        );
        let result = builder.build().unwrap();

        assert_eq!(result.records, 8);
        assert_eq!(result.auxiliary, 4);
        assert_eq!(result.assets, 0);
        assert_eq!(result.output_file, temp.path().join("dist/index.html"));
        assert!(result.output_file.exists());
    }

    #[test]
    fn writes_nested_output_file() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            output_file: PathBuf::from("en/index.html"),
            ..site(temp.path(), "{{ records|length }}")
        };

        let store = ContentStore::new(vec![ContentRecord::new("a", "A", "")], vec![]).unwrap();
        StaticBuilder::new(config, store, Configuration::default())
            .build()
            .unwrap();

        let html = fs::read_to_string(temp.path().join("dist/en/index.html")).unwrap();
        assert_eq!(html, "1");
    }

    #[test]
    fn fails_when_template_missing() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            template: "home.html".to_string(),
            ..site(temp.path(), "unused")
        };

        let result = StaticBuilder::new(
            config,
            ContentStore::builtin().unwrap(),
            Configuration::default(),
        )
        .build();

        assert!(matches!(
            result,
            Err(BuildError::TemplateError(TemplateError::Render(_)))
        ));
        assert!(!temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn fails_when_template_dir_missing() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            template_dir: temp.path().join("nowhere"),
            output_dir: temp.path().join("dist"),
            static_dir: temp.path().join("static"),
            ..Default::default()
        };

        let result = StaticBuilder::new(
            config,
            ContentStore::builtin().unwrap(),
            Configuration::default(),
        )
        .build();

        assert!(matches!(
            result,
            Err(BuildError::TemplateError(TemplateError::MissingDir(_)))
        ));
    }

    #[test]
    fn fails_when_static_output_is_blocked() {
        let temp = tempdir().unwrap();
        let config = site(temp.path(), "page");
        fs::create_dir_all(temp.path().join("static")).unwrap();
        fs::write(temp.path().join("static/app.js"), "js").unwrap();
        fs::create_dir_all(temp.path().join("dist/static")).unwrap();
        fs::create_dir_all(temp.path().join("dist/static/app.js")).unwrap();

        let result = StaticBuilder::new(
            config,
            ContentStore::builtin().unwrap(),
            Configuration::default(),
        )
        .build();

        assert!(matches!(
            result,
            Err(BuildError::AssetError(AssetError::Write { .. }))
        ));
        assert!(!temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn fails_when_output_file_is_a_directory() {
        let temp = tempdir().unwrap();
        let config = site(temp.path(), "page");
        fs::create_dir_all(temp.path().join("dist/index.html")).unwrap();

        let result = StaticBuilder::new(
            config,
            ContentStore::builtin().unwrap(),
            Configuration::default(),
        )
        .build();

        assert!(matches!(result, Err(BuildError::WriteError { .. })));
    }
}
