//! Style preprocessing stage.
//!
//! Rewrites style blocks in already-expanded markup: a configured style
//! partial is prepended inside every style block, while blocks whose type
//! attribute names a preserved block type (structured data such as ld+json)
//! are copied through byte-for-byte.

use std::sync::LazyLock;

use regex::Regex;

use crate::traits::{PreprocessStage, StageDescriptor, StageError, StagePhase};

/// Options for the style preprocessing stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOptions {
    /// Block types copied through verbatim, matched against the `type`
    /// attribute (full value or bare subtype)
    pub preserve: Vec<String>,

    /// Import statement prepended inside every processed style block
    pub prepend: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            preserve: vec!["ld+json".to_string()],
            prepend: None,
        }
    }
}

/// Transform-phase stage rewriting style blocks.
///
/// Declares no extensions of its own: it consumes whatever markup the
/// Expand-phase stages produced.
#[derive(Debug, Clone, Default)]
pub struct StyleStage {
    options: StyleOptions,
}

static BLOCK_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(style|script)\b[^>]*>").expect("Invalid block open regex"));

static TYPE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"type\s*=\s*["']([^"']+)["']"#).expect("Invalid type attribute regex")
});

impl StyleStage {
    /// Create a stage with the default options (preserve ld+json, no
    /// prepend).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stage with explicit options.
    pub fn with_options(options: StyleOptions) -> Self {
        Self { options }
    }

    /// Create a stage that prepends the given import statement inside
    /// every style block it processes.
    pub fn with_prepend(statement: &str) -> Self {
        Self::with_options(StyleOptions {
            prepend: Some(statement.to_string()),
            ..StyleOptions::default()
        })
    }

    /// The configured options.
    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    /// Check whether an open tag's `type` attribute names a preserved
    /// block type.
    fn is_preserved(&self, open_tag: &str) -> bool {
        let Some(caps) = TYPE_ATTR_RE.captures(open_tag) else {
            return false;
        };
        let value = caps.get(1).unwrap().as_str();

        self.options
            .preserve
            .iter()
            .any(|t| value == t || value.rsplit('/').next() == Some(t.as_str()))
    }
}

impl PreprocessStage for StyleStage {
    fn name(&self) -> &'static str {
        "style"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Transform
    }

    fn added_extensions(&self) -> &[String] {
        &[]
    }

    fn transform(&self, source: &str, _extension: &str) -> Result<String, StageError> {
        let Some(prepend) = self.options.prepend.as_deref() else {
            return Ok(source.to_string());
        };

        let mut output = String::with_capacity(source.len() + prepend.len());
        let mut pos = 0;

        while let Some(caps) = BLOCK_OPEN_RE.captures_at(source, pos) {
            let open = caps.get(0).unwrap();
            let tag = caps.get(1).unwrap().as_str();

            // Everything up to and including the open tag passes through.
            output.push_str(&source[pos..open.end()]);

            if tag == "style" && !self.is_preserved(open.as_str()) {
                let close = source[open.end()..].find("</style>").ok_or_else(|| {
                    StageError::UnterminatedBlock {
                        tag: "style".to_string(),
                    }
                })?;
                let content_end = open.end() + close;

                output.push_str(prepend);
                output.push('\n');
                output.push_str(&source[open.end()..content_end]);
                pos = content_end;
            } else {
                // Preserved blocks and scripts are skipped wholesale so the
                // prepend cannot leak in, even when their content contains
                // style-like text.
                let close_tag = format!("</{}>", tag);
                match source[open.end()..].find(&close_tag) {
                    Some(idx) => {
                        let close_end = open.end() + idx + close_tag.len();
                        output.push_str(&source[open.end()..close_end]);
                        pos = close_end;
                    }
                    None if self.is_preserved(open.as_str()) => {
                        return Err(StageError::UnterminatedBlock {
                            tag: tag.to_string(),
                        });
                    }
                    // An unclosed plain script is inert text.
                    None => pos = open.end(),
                }
            }
        }

        output.push_str(&source[pos..]);

        Ok(output)
    }

    fn descriptor(&self) -> StageDescriptor {
        let options = match &self.options.prepend {
            Some(prepend) => serde_json::json!({
                "preserve": self.options.preserve,
                "prepend": prepend,
            }),
            None => serde_json::json!({ "preserve": self.options.preserve }),
        };

        StageDescriptor {
            name: self.name().to_string(),
            phase: self.phase(),
            extensions: Vec::new(),
            options: Some(options),
        }
    }
}
