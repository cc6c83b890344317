//! Scaffold a factsheet project in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use factsheet_static::templates::DEFAULT_INDEX_TEMPLATE;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing factsheet...");

    let written = scaffold(Path::new(""), config_path, yes)?;
    if written.is_empty() {
        tracing::warn!("All files already exist. Use --yes to overwrite.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'factsheet build' to generate the site.");

    Ok(())
}

/// Write the starter files under `root`, returning the paths written.
fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let files = [
        (root.join(config_path), DEFAULT_CONFIG),
        (root.join("templates").join("index.html"), DEFAULT_INDEX_TEMPLATE),
        (root.join("static").join("css").join("style.css"), DEFAULT_CSS),
    ];

    let mut written = Vec::new();
    for (path, content) in files {
        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", path.display());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
        written.push(path);
    }

    Ok(written)
}

const DEFAULT_CONFIG: &str = r#"# Factsheet Configuration

[site]
# Directory containing templates
templates = "templates"

# Template rendered into the output file
template = "index.html"

# Static assets copied to <output>/static (skipped if missing)
static = "static"

# Output directory and page file name
output = "dist"
output_file = "index.html"
"#;

const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  margin: 0;
  line-height: 1.6;
  color: #111;
}

.facts {
  display: grid;
  gap: 1.5rem;
  max-width: 720px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.fact-card {
  border: 1px solid #ddd;
  border-radius: 0.5rem;
  padding: 1.25rem;
}

.fact-title {
  font-size: 1.25rem;
  margin: 0 0 0.5rem;
}

.panels {
  display: none;
}

@media (min-width: 1024px) {
  .panels {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
    max-width: 960px;
    margin: 0 auto 2rem;
  }
}

.subscribe {
  display: flex;
  gap: 0.5rem;
  justify-content: center;
  padding: 2rem 1rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_starter_files() {
        let temp = tempdir().unwrap();

        let written = scaffold(temp.path(), Path::new("factsheet.toml"), false).unwrap();

        assert_eq!(written.len(), 3);
        assert!(temp.path().join("factsheet.toml").exists());
        assert!(temp.path().join("static/css/style.css").exists());
        let template = fs::read_to_string(temp.path().join("templates/index.html")).unwrap();
        assert_eq!(template, DEFAULT_INDEX_TEMPLATE);
    }

    #[test]
    fn keeps_existing_files_unless_forced() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("factsheet.toml");
        fs::write(&config, "# mine").unwrap();

        let written = scaffold(temp.path(), Path::new("factsheet.toml"), false).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(&config).unwrap(), "# mine");

        let written = scaffold(temp.path(), Path::new("factsheet.toml"), true).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(fs::read_to_string(&config).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn default_config_parses() {
        let value: toml::Value = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(value["site"]["output"].as_str(), Some("dist"));
    }
}
