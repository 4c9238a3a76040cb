//! Profile-photo storage on the local filesystem.

use std::path::Path;

use anyhow::Context as _;

use crate::error::ApiError;

/// File extension for an accepted image content type; `None` rejects the upload.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Write photo bytes under the upload dir. The caller has already
/// validated content type and size.
pub async fn save_photo(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<(), ApiError> {
    let path = upload_dir.join(filename);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("write photo {}", path.display()))?;
    Ok(())
}
