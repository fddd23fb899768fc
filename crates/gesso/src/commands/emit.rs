//! Configuration manifest emission.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config;

/// Run the emit command.
pub fn run(config_path: &Path, root: Option<PathBuf>, pretty: bool) -> Result<()> {
    let file_config = config::load_config(config_path)?;
    let configuration = config::compose_configuration(&file_config, root)?;

    let manifest = configuration.manifest();
    let json = if pretty {
        serde_json::to_string_pretty(&manifest)
    } else {
        serde_json::to_string(&manifest)
    }
    .context("Failed to serialize manifest")?;

    println!("{}", json);

    Ok(())
}
