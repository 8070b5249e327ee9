use crate::core::{Document, Storage};
use crate::utils::error::{ReplaceError, Result};
use std::path::Path;

/// Reads `path` and parses it as JSON. The raw text is kept for substitution.
pub fn load_document<S: Storage>(storage: &S, path: &Path) -> Result<Document> {
    if !storage.exists(path) {
        return Err(ReplaceError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = storage.read_to_string(path)?;
    tracing::debug!("Read {} bytes from {}", raw.len(), path.display());

    let value = serde_json::from_str(&raw).map_err(|source| ReplaceError::JsonParseError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document { raw, value })
}
