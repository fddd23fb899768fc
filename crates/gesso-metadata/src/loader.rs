//! Project metadata document loading.

use std::fs;
use std::path::Path;

use crate::settings::{AdapterSettings, ProjectMetadata};

/// File name of the project metadata document, anchored to the project root.
pub const METADATA_FILE: &str = "gesso.json";

/// Errors that can occur when loading project metadata.
///
/// Both are fatal to the build invocation: no partial settings are ever
/// produced after a failure.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata file not found: {0}")]
    MissingFile(String),

    #[error("Failed to parse metadata: {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load adapter settings from a project metadata document.
///
/// Reads the file fresh on every call, so edits to the document take effect
/// on the next build without a restart. A missing `pages`, `assets` or
/// `fallback` key is a [`MetadataError::Parse`], never silently defaulted;
/// the optional flags are left for [`AdapterSettings::resolve`].
pub fn load_metadata(path: &Path) -> Result<AdapterSettings, MetadataError> {
    if !path.exists() {
        return Err(MetadataError::MissingFile(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| MetadataError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let metadata: ProjectMetadata =
        serde_json::from_str(&content).map_err(|e| MetadataError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(metadata.sveltekit.adapter)
}
