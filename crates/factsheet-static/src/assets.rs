//! Publishing of static assets into the output tree.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Summary of an asset publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Number of files copied
    pub files: usize,
    /// True when the source directory did not exist
    pub skipped: bool,
}

/// Errors that can occur while publishing assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy the tree under `source_dir` into `dest_dir`.
///
/// A missing source directory is not an error. Files already present at the
/// destination are overwritten; other destination files are left alone. A
/// failure part way through leaves whatever was already copied.
pub fn publish(source_dir: &Path, dest_dir: &Path) -> Result<PublishReport, AssetError> {
    if !source_dir.exists() {
        tracing::warn!(
            "Static directory {} not found, skipping assets",
            source_dir.display()
        );
        return Ok(PublishReport {
            files: 0,
            skipped: true,
        });
    }

    fs::create_dir_all(dest_dir).map_err(|e| AssetError::Write {
        path: dest_dir.to_path_buf(),
        source: e,
    })?;

    let mut files = 0;

    for entry in WalkDir::new(source_dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_dir.to_path_buf()),
            message: e.to_string(),
        })?;

        let path = entry.path();
        let relative = path.strip_prefix(source_dir).unwrap_or(path);
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| AssetError::Write {
                path: target.clone(),
                source: e,
            })?;
            continue;
        }

        let bytes = fs::read(path).map_err(|e| AssetError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(&target, bytes).map_err(|e| AssetError::Write {
            path: target.clone(),
            source: e,
        })?;

        tracing::debug!("Copied {}", relative.display());
        files += 1;
    }

    Ok(PublishReport {
        files,
        skipped: false,
    })
}
