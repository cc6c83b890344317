//! Static page build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use factsheet_content::ContentStore;
use factsheet_static::{read_config, BuildConfig, StaticBuilder};
use serde::Deserialize;

/// Configuration file structure (factsheet.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SiteConfig {
    templates: String,
    template: String,
    #[serde(rename = "static")]
    static_dir: String,
    output: String,
    output_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let defaults = BuildConfig::default();
        Self {
            templates: defaults.template_dir.display().to_string(),
            template: defaults.template,
            static_dir: defaults.static_dir.display().to_string(),
            output: defaults.output_dir.display().to_string(),
            output_file: defaults.output_file.display().to_string(),
        }
    }
}

impl SiteConfig {
    fn into_build_config(self, output: Option<PathBuf>) -> BuildConfig {
        BuildConfig {
            template_dir: PathBuf::from(self.templates),
            template: self.template,
            static_dir: PathBuf::from(self.static_dir),
            output_dir: output.unwrap_or_else(|| PathBuf::from(self.output)),
            output_file: PathBuf::from(self.output_file),
        }
    }
}

/// Load configuration from the config file if it exists.
/// Returns an error if the file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let config = file_config.site.into_build_config(output);
    let store = ContentStore::builtin().context("Invalid built-in content")?;
    let site = read_config();

    if site.form_url.is_empty() {
        tracing::debug!("Mailing-list form URL not set, rendering empty form action");
    }

    let result = StaticBuilder::new(config, store, site).build()?;

    tracing::info!(
        "Rendered {} facts and {} panels, copied {} assets in {}ms",
        result.records,
        result.auxiliary,
        result.assets,
        result.duration_ms
    );
    tracing::info!("Static site generated: {}", result.output_file.display());

    Ok(())
}
