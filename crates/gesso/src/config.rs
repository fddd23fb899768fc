//! CLI configuration file (gesso.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gesso_compose::{profiles, BuildConfiguration};
use gesso_metadata::AdapterSettings;
use serde::Deserialize;

/// Configuration file structure (gesso.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub adapter: AdapterSection,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Directory holding the project metadata document
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct StyleConfig {
    /// Stylesheet partial injected into unpreserved style blocks
    pub prepend_partial: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AdapterSection {
    /// Use the literal settings below instead of reading metadata
    #[serde(default)]
    pub fixed: bool,

    /// Literal adapter settings; only consulted when `fixed` is set
    pub settings: Option<AdapterSettings>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Load configuration from gesso.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Compose a build configuration from the file config, with the project
/// root optionally overridden from the command line.
pub fn compose_configuration(
    file_config: &ConfigFile,
    root_override: Option<PathBuf>,
) -> Result<BuildConfiguration> {
    if file_config.adapter.fixed {
        let settings = file_config
            .adapter
            .settings
            .clone()
            .context("adapter.fixed is set but [adapter.settings] is missing")?;
        if file_config.style.prepend_partial.is_some() {
            tracing::warn!("style.prepend_partial is ignored when adapter.fixed is set");
        }
        return Ok(profiles::fixed(settings).compose()?);
    }

    let root = root_override.unwrap_or_else(|| file_config.project.root.clone());
    let partial = file_config.style.prepend_partial.as_deref();

    let configuration = profiles::metadata_driven(root, partial)
        .compose()
        .context("Failed to compose build configuration")?;
    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.project.root, PathBuf::from("."));
        assert_eq!(config.style.prepend_partial, None);
        assert!(!config.adapter.fixed);
        assert!(config.adapter.settings.is_none());
    }

    #[test]
    fn parses_full_config_file() {
        let raw = r#"
            [project]
            root = "site"

            [style]
            prepend_partial = "src/_variables.scss"

            [adapter]
            fixed = true

            [adapter.settings]
            pages = "build"
            assets = "build"
            fallback = "200.html"
            precompress = true
        "#;

        let config: ConfigFile = toml::from_str(raw).unwrap();

        assert_eq!(config.project.root, PathBuf::from("site"));
        assert_eq!(
            config.style.prepend_partial.as_deref(),
            Some("src/_variables.scss")
        );
        assert!(config.adapter.fixed);

        let settings = config.adapter.settings.unwrap();
        assert_eq!(settings.pages_dir, "build");
        assert_eq!(settings.precompress, Some(true));
        assert_eq!(settings.strict, None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("gesso.toml")).unwrap();

        assert_eq!(config.project.root, PathBuf::from("."));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gesso.toml");
        fs::write(&path, "[project\nroot = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn fixed_without_settings_is_an_error() {
        let config = ConfigFile {
            adapter: AdapterSection {
                fixed: true,
                settings: None,
            },
            ..ConfigFile::default()
        };

        assert!(compose_configuration(&config, None).is_err());
    }

    #[test]
    fn fixed_composes_without_touching_metadata() {
        let config = ConfigFile {
            adapter: AdapterSection {
                fixed: true,
                settings: Some(AdapterSettings::new("build", "build", "200.html")),
            },
            ..ConfigFile::default()
        };

        let configuration = compose_configuration(&config, None).unwrap();

        assert_eq!(configuration.adapter().pages_dir, "build");
        assert!(configuration.adapter().strict);
    }

    #[test]
    fn root_override_wins_over_file_value() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("gesso.json"),
            r#"{"sveltekit":{"adapter":{"pages":"build","assets":"build","fallback":"200.html"}}}"#,
        )
        .unwrap();

        let config = ConfigFile {
            project: ProjectConfig {
                root: PathBuf::from("nowhere/that/exists"),
            },
            ..ConfigFile::default()
        };

        let configuration =
            compose_configuration(&config, Some(temp.path().to_path_buf())).unwrap();

        assert_eq!(configuration.adapter().fallback_document, "200.html");
    }
}
