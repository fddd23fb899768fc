//! Ready-made composer profiles.
//!
//! A profile pairs a settings provider with the standard stage set:
//! markdown expansion followed by style injection. Projects pick one
//! at build time; the provider choice is fixed from then on.

use std::path::PathBuf;

use gesso_metadata::{AdapterSettings, FixedSettings, MetadataFile};
use gesso_stages::{MarkdownStage, StyleStage};

use crate::composer::Composer;

/// Composer that reads adapter settings from the project metadata
/// document under `root`.
///
/// When `style_partial` names a stylesheet partial, every unpreserved
/// style block gets a `@use` statement for it injected up front.
pub fn metadata_driven(
    root: impl Into<PathBuf>,
    style_partial: Option<&str>,
) -> Composer<MetadataFile> {
    let style = match style_partial {
        Some(partial) => StyleStage::with_prepend(&use_statement(partial)),
        None => StyleStage::new(),
    };

    Composer::new(MetadataFile::new(root))
        .with_stage(MarkdownStage::new())
        .with_stage(style)
}

/// Composer that carries its adapter settings literally and never
/// consults the filesystem.
pub fn fixed(settings: AdapterSettings) -> Composer<FixedSettings> {
    Composer::new(FixedSettings::new(settings))
        .with_stage(MarkdownStage::new())
        .with_stage(StyleStage::new())
}

fn use_statement(partial: &str) -> String {
    format!(r#"@use "{}" as *;"#, partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesso_stages::StagePhase;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_metadata(dir: &std::path::Path) {
        fs::write(
            dir.join("gesso.json"),
            r#"{"sveltekit": {"adapter": {"pages": "build", "assets": "build", "fallback": "200.html"}}}"#,
        )
        .unwrap();
    }

    #[test]
    fn metadata_profile_composes_from_the_document() {
        let temp = tempdir().unwrap();
        write_metadata(temp.path());

        let config = metadata_driven(temp.path(), None).compose().unwrap();

        assert_eq!(config.adapter().pages_dir, "build");
        assert_eq!(config.extensions()[0], ".svelte");

        let names: Vec<&str> = config.stages().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["markdown", "style"]);
    }

    #[test]
    fn style_partial_becomes_a_use_statement() {
        let temp = tempdir().unwrap();
        write_metadata(temp.path());

        let config = metadata_driven(temp.path(), Some("src/_variables.scss"))
            .compose()
            .unwrap();

        let style = config
            .stages()
            .iter()
            .find(|s| s.phase() == StagePhase::Transform)
            .unwrap();
        let options = style.descriptor().options.unwrap();
        assert_eq!(options["prepend"], r#"@use "src/_variables.scss" as *;"#);
    }

    #[test]
    fn fixed_profile_never_consults_metadata() {
        // No metadata document anywhere near this settings value.
        let settings = AdapterSettings::new("dist", "dist", "index.html");

        let config = fixed(settings).compose().unwrap();

        assert_eq!(config.adapter().pages_dir, "dist");
        assert_eq!(config.adapter().fallback_document, "index.html");

        let names: Vec<&str> = config.stages().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["markdown", "style"]);
    }
}
