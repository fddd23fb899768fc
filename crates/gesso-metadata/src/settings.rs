//! Adapter settings and their resolved form.

use serde::{Deserialize, Serialize};

/// Root of the project metadata document.
///
/// The document carries more than this; only the `sveltekit` sub-record is
/// consumed here, and unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMetadata {
    /// Kit-facing settings
    pub sveltekit: KitSettings,
}

/// The `sveltekit` sub-record of the metadata document.
#[derive(Debug, Clone, Deserialize)]
pub struct KitSettings {
    /// Static-export adapter settings
    pub adapter: AdapterSettings,
}

/// Static-export adapter settings as authored in project metadata.
///
/// `pages`, `assets` and `fallback` are required; a document without them
/// does not parse. The two flags are optional and stay absent until
/// [`AdapterSettings::resolve`] applies their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdapterSettings {
    /// Output directory for prerendered pages
    #[serde(rename = "pages")]
    pub pages_dir: String,

    /// Output directory for static assets
    #[serde(rename = "assets")]
    pub assets_dir: String,

    /// Document served for routes with no prerendered page
    #[serde(rename = "fallback")]
    pub fallback_document: String,

    /// Precompress outputs (absent defaults to false)
    #[serde(default)]
    pub precompress: Option<bool>,

    /// Fail the build on prerender errors (absent defaults to true)
    #[serde(default)]
    pub strict: Option<bool>,
}

impl AdapterSettings {
    /// Create settings with the three required fields; the optional flags
    /// start absent and pick up their defaults at resolution.
    pub fn new(pages_dir: &str, assets_dir: &str, fallback_document: &str) -> Self {
        Self {
            pages_dir: pages_dir.to_string(),
            assets_dir: assets_dir.to_string(),
            fallback_document: fallback_document.to_string(),
            precompress: None,
            strict: None,
        }
    }

    /// Set the precompress flag explicitly.
    pub fn with_precompress(mut self, value: bool) -> Self {
        self.precompress = Some(value);
        self
    }

    /// Set the strict flag explicitly.
    pub fn with_strict(mut self, value: bool) -> Self {
        self.strict = Some(value);
        self
    }

    /// Resolve field-level defaults into a fully-concrete configuration.
    pub fn resolve(&self) -> AdapterConfig {
        AdapterConfig {
            pages_dir: self.pages_dir.clone(),
            assets_dir: self.assets_dir.clone(),
            fallback_document: self.fallback_document.clone(),
            precompress: self.precompress.unwrap_or(false),
            strict: resolve_strict(self.strict),
        }
    }
}

/// Resolve the `strict` flag.
///
/// Defaulting is falsy-or: any value other than an explicit `true` resolves
/// to `true`, so `strict: false` in metadata is indistinguishable from
/// omission.
fn resolve_strict(strict: Option<bool>) -> bool {
    match strict {
        Some(true) => true,
        // Falsy-or: explicit false also resolves to true.
        Some(false) | None => true,
    }
}

/// Fully-resolved adapter parameters.
///
/// Both flags are concrete by the time this value exists; nothing past
/// resolution ever sees an absent `precompress` or `strict`. Serializes
/// with the wire keys the build tool consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterConfig {
    /// Output directory for prerendered pages
    #[serde(rename = "pages")]
    pub pages_dir: String,

    /// Output directory for static assets
    #[serde(rename = "assets")]
    pub assets_dir: String,

    /// Document served for routes with no prerendered page
    #[serde(rename = "fallback")]
    pub fallback_document: String,

    /// Precompress outputs
    pub precompress: bool,

    /// Fail the build on prerender errors
    pub strict: bool,
}
