//! Source-tree scanning against the resolved extension list.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::config;

/// Run the routes command.
pub fn run(config_path: &Path, root: Option<PathBuf>, dir: &Path) -> Result<()> {
    let file_config = config::load_config(config_path)?;
    let configuration = config::compose_configuration(&file_config, root)?;
    let extensions = configuration.extensions();

    if !dir.exists() {
        anyhow::bail!("Source directory not found: {}", dir.display());
    }

    let mut claimed = 0usize;
    let mut skipped = 0usize;

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        match claiming_extension(&name, extensions) {
            Some(extension) => {
                claimed += 1;
                println!("{}\t{}", extension, entry.path().display());
            }
            None => skipped += 1,
        }
    }

    tracing::info!(
        "{} files claimed, {} skipped under {}",
        claimed,
        skipped,
        dir.display()
    );

    Ok(())
}

/// First extension in priority order that claims the file name.
fn claiming_extension<'a>(name: &str, extensions: &'a [String]) -> Option<&'a str> {
    extensions
        .iter()
        .map(String::as_str)
        .find(|extension| name.ends_with(extension))
}
