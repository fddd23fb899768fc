//! Wire representation of an assembled configuration.
//!
//! Downstream tooling consumes configurations as JSON: the resolved
//! extension list, the stage descriptors in execution order, and a
//! `kit` record carrying the adapter parameters and prerender policy.

use gesso_metadata::AdapterConfig;
use gesso_stages::StageDescriptor;
use serde::Serialize;

/// Serializable view of a [`BuildConfiguration`](crate::BuildConfiguration).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigManifest {
    /// Recognized file extensions, base extension first
    pub extensions: Vec<String>,

    /// Stage descriptors in execution order
    pub preprocess: Vec<StageDescriptor>,

    /// Kit-level settings
    pub kit: KitManifest,
}

/// Kit section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitManifest {
    /// Resolved adapter parameters
    pub adapter: AdapterConfig,

    /// Prerender policy
    pub prerender: PrerenderPolicy,
}

/// Prerender crawl policy.
///
/// Every assembled configuration carries the same policy: crawl the
/// whole site starting from every entry point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrerenderPolicy {
    /// Whether the prerenderer follows links it discovers
    pub crawl: bool,

    /// Entry points the crawl starts from
    pub entries: Vec<String>,
}

impl PrerenderPolicy {
    /// The full-site policy: crawl from every entry point.
    pub fn crawl_all() -> Self {
        Self {
            crawl: true,
            entries: vec!["*".to_string()],
        }
    }
}

impl Default for PrerenderPolicy {
    fn default() -> Self {
        Self::crawl_all()
    }
}
