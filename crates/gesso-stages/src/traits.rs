//! Trait definitions for preprocessing stages.

use serde::Serialize;

use crate::frontmatter::FrontmatterError;

/// Position of a stage in the assembled pipeline.
///
/// Every Expand-phase stage runs strictly before every Transform-phase
/// stage: a Transform stage consumes the already-expanded markup of a
/// document, not its original source. The ordering is declared here rather
/// than left to registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StagePhase {
    /// Widens the recognized extension set and rewrites dialect sources
    Expand,
    /// Rewrites blocks inside already-expanded markup
    Transform,
}

/// Errors that can occur while a stage transforms a document.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Unterminated <{tag}> block - missing closing tag")]
    UnterminatedBlock { tag: String },
}

/// A serializable record of a configured stage, as it appears in the
/// emitted build configuration.
///
/// Options a variant did not supply are absent from the serialized form,
/// never empty placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDescriptor {
    /// Stage identifier (e.g., "markdown", "style")
    pub name: String,

    /// Pipeline phase
    pub phase: StagePhase,

    /// Extensions the stage contributes beyond the base markup extension
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Stage-specific options, if the stage carries any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Trait for preprocessing stages.
pub trait PreprocessStage: Send + Sync {
    /// Stage identifier (e.g., "markdown", "style")
    fn name(&self) -> &'static str;

    /// Phase the stage runs in.
    fn phase(&self) -> StagePhase;

    /// Extensions this stage teaches the pipeline to accept beyond the
    /// base markup extension. Empty for non-expanding stages.
    fn added_extensions(&self) -> &[String];

    /// Transform raw source text into markup.
    ///
    /// # Arguments
    /// * `source` - Raw document text
    /// * `extension` - File extension of the document, with leading dot
    fn transform(&self, source: &str, extension: &str) -> Result<String, StageError>;

    /// Serializable record of this configured stage.
    fn descriptor(&self) -> StageDescriptor;
}
