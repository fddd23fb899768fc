//! Configuration composer.

use std::sync::Arc;

use gesso_metadata::{AdapterConfig, AdapterSettings, AdapterSettingsProvider, MetadataError};
use gesso_stages::PreprocessStage;

use crate::manifest::{ConfigManifest, KitManifest, PrerenderPolicy};

/// Base markup extension every configuration starts from.
pub const BASE_EXTENSION: &str = ".svelte";

/// The assembled build configuration.
///
/// Constructed once per invocation and handed to the build tool; never
/// mutated afterwards and never persisted.
pub struct BuildConfiguration {
    extensions: Vec<String>,
    stages: Vec<Arc<dyn PreprocessStage>>,
    adapter: AdapterConfig,
    prerender: PrerenderPolicy,
}

impl BuildConfiguration {
    /// Recognized source extensions, base extension first.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The stage sequence, in execution order.
    pub fn stages(&self) -> &[Arc<dyn PreprocessStage>] {
        &self.stages
    }

    /// Resolved adapter parameters.
    pub fn adapter(&self) -> &AdapterConfig {
        &self.adapter
    }

    /// The prerender policy.
    pub fn prerender(&self) -> &PrerenderPolicy {
        &self.prerender
    }

    /// Serializable snapshot in the shape the build tool consumes.
    ///
    /// Structural equality of configurations is structural equality of
    /// their manifests.
    pub fn manifest(&self) -> ConfigManifest {
        ConfigManifest {
            extensions: self.extensions.clone(),
            preprocess: self.stages.iter().map(|stage| stage.descriptor()).collect(),
            kit: KitManifest {
                adapter: self.adapter.clone(),
                prerender: self.prerender.clone(),
            },
        }
    }
}

/// Builds the final configuration from one settings provider and the
/// stages registered on it.
pub struct Composer<P> {
    provider: P,
    stages: Vec<Arc<dyn PreprocessStage>>,
}

impl<P: AdapterSettingsProvider> Composer<P> {
    /// Create a composer around a settings provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            stages: Vec::new(),
        }
    }

    /// Register a stage.
    ///
    /// Registration order decides extension priority and survives within a
    /// phase; across phases the declared [`StagePhase`] ordering wins.
    ///
    /// [`StagePhase`]: gesso_stages::StagePhase
    pub fn with_stage(mut self, stage: impl PreprocessStage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Load settings from the provider and assemble the configuration.
    ///
    /// The only failure mode is the provider's own; assembly itself cannot
    /// fail, and no partial configuration is produced on error.
    pub fn compose(&self) -> Result<BuildConfiguration, MetadataError> {
        let settings = self.provider.settings()?;
        Ok(assemble(&settings, &self.stages))
    }
}

/// Assemble a configuration from settings and registered stages.
///
/// Deterministic and side-effect free: identical inputs yield structurally
/// equal configurations.
pub fn assemble(
    settings: &AdapterSettings,
    stages: &[Arc<dyn PreprocessStage>],
) -> BuildConfiguration {
    BuildConfiguration {
        extensions: resolve_extensions(stages),
        stages: sequence_stages(stages),
        adapter: settings.resolve(),
        prerender: PrerenderPolicy::crawl_all(),
    }
}

/// Resolve the extension allow-list: base extension first, then each
/// stage's contributions in registration order, duplicates skipped.
/// Earlier extensions win when downstream file routing could apply
/// several.
fn resolve_extensions(stages: &[Arc<dyn PreprocessStage>]) -> Vec<String> {
    let mut extensions = vec![BASE_EXTENSION.to_string()];

    for stage in stages {
        for ext in stage.added_extensions() {
            if !extensions.contains(ext) {
                extensions.push(ext.clone());
            }
        }
    }

    extensions
}

/// Order stages by phase: every Expand stage strictly before every
/// Transform stage. The sort is stable, so registration order survives
/// within a phase.
fn sequence_stages(stages: &[Arc<dyn PreprocessStage>]) -> Vec<Arc<dyn PreprocessStage>> {
    let mut ordered: Vec<Arc<dyn PreprocessStage>> = stages.to_vec();
    ordered.sort_by_key(|stage| stage.phase());
    ordered
}
