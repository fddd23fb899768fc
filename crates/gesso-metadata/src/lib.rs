//! Project metadata loading and adapter settings resolution.
//!
//! This crate reads the adapter-relevant subset of a project's metadata
//! document and resolves it into fully-defaulted adapter parameters for
//! the build-configuration composer.

pub mod loader;
pub mod provider;
pub mod settings;

pub use loader::{load_metadata, MetadataError, METADATA_FILE};
pub use provider::{AdapterSettingsProvider, FixedSettings, MetadataFile};
pub use settings::{AdapterConfig, AdapterSettings, KitSettings, ProjectMetadata};
