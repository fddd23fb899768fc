//! Configuration verification.

use std::path::{Path, PathBuf};

use anyhow::Result;
use gesso_stages::StagePhase;

use crate::config;

/// Run the check command.
pub fn run(config_path: &Path, root: Option<PathBuf>) -> Result<()> {
    let file_config = config::load_config(config_path)?;
    let configuration = config::compose_configuration(&file_config, root)?;

    let adapter = configuration.adapter();
    tracing::info!(
        "Adapter: pages={} assets={} fallback={}",
        adapter.pages_dir,
        adapter.assets_dir,
        adapter.fallback_document
    );
    tracing::info!(
        "Flags: precompress={} strict={}",
        adapter.precompress,
        adapter.strict
    );
    tracing::info!("Extensions: {}", configuration.extensions().join(", "));

    for (index, stage) in configuration.stages().iter().enumerate() {
        let phase = match stage.phase() {
            StagePhase::Expand => "expand",
            StagePhase::Transform => "transform",
        };
        tracing::info!("Stage {}: {} ({})", index + 1, stage.name(), phase);
    }

    tracing::info!("Configuration OK");

    Ok(())
}
