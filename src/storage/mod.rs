//! Page document storage
//!
//! Reads the static page once and writes the spliced result back to the same
//! path. Writes go to a temporary sibling file first and are then renamed
//! over the target, so a failed write leaves the original page intact.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Error, Result};
use crate::models::PageDocument;

/// Read the page document at `path`
pub async fn read_page(path: &Path) -> Result<PageDocument> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| Error::filesystem(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read page document");

    Ok(PageDocument::new(path, content))
}

/// Overwrite the page at `path` with `content`
///
/// Returns the number of bytes written.
pub async fn write_page(path: &Path, content: &str) -> Result<usize> {
    let temp_path = temp_path_for(path);

    // Write to temp file first, then rename (atomic)
    let result = match fs::write(&temp_path, content).await {
        Ok(()) => fs::rename(&temp_path, path)
            .await
            .map_err(|e| Error::filesystem(path, e)),
        Err(e) => Err(Error::filesystem(&temp_path, e)),
    };

    if let Err(e) = result {
        discard_temp(&temp_path).await;
        return Err(e);
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote page document");

    Ok(content.len())
}

/// Remove a leftover temp file; only regular files are touched
async fn discard_temp(temp_path: &Path) {
    let is_file = fs::symlink_metadata(temp_path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);

    if is_file {
        if let Err(e) = fs::remove_file(temp_path).await {
            tracing::warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("page"));

    path.with_file_name(format!(".{filename}.feedsplice.tmp"))
}
