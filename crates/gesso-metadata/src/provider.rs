//! Adapter settings providers.
//!
//! A theme variant selects its provider when the composer is constructed:
//! one reads the project metadata document, the other embeds a literal
//! settings constant. The choice is fixed per variant, never a runtime
//! branch.

use std::path::PathBuf;

use crate::loader::{load_metadata, MetadataError, METADATA_FILE};
use crate::settings::AdapterSettings;

/// Source of adapter settings for a composer.
pub trait AdapterSettingsProvider: Send + Sync {
    /// Produce the adapter settings for this build invocation.
    fn settings(&self) -> Result<AdapterSettings, MetadataError>;
}

/// Reads settings from the metadata document at a project root.
///
/// The root is fixed at construction, so loading is insensitive to the
/// directory the build is invoked from.
#[derive(Debug, Clone)]
pub struct MetadataFile {
    root: PathBuf,
}

impl MetadataFile {
    /// Create a provider anchored to the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of the metadata document this provider reads.
    pub fn path(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }
}

impl AdapterSettingsProvider for MetadataFile {
    fn settings(&self) -> Result<AdapterSettings, MetadataError> {
        load_metadata(&self.path())
    }
}

/// Wraps a literal settings constant; never touches the filesystem.
#[derive(Debug, Clone)]
pub struct FixedSettings {
    settings: AdapterSettings,
}

impl FixedSettings {
    /// Create a provider around a literal settings value.
    pub fn new(settings: AdapterSettings) -> Self {
        Self { settings }
    }
}

impl AdapterSettingsProvider for FixedSettings {
    fn settings(&self) -> Result<AdapterSettings, MetadataError> {
        Ok(self.settings.clone())
    }
}
