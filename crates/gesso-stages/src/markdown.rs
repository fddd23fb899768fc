//! Markdown expansion stage.
//!
//! Teaches the pipeline to accept markdown-dialect documents alongside the
//! base markup extension, and rewrites them at the boundary: frontmatter is
//! validated and stripped, the body rendered to markup. Documents with
//! unrecognized extensions pass through untouched.

use pulldown_cmark::{html, Options, Parser};

use crate::frontmatter::extract_frontmatter;
use crate::traits::{PreprocessStage, StageDescriptor, StageError, StagePhase};

/// Extensions recognized when none are supplied at construction.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".svelte.md", ".md", ".svx"];

/// Expand-phase stage for markdown-dialect documents.
#[derive(Debug, Clone)]
pub struct MarkdownStage {
    extensions: Vec<String>,
}

impl MarkdownStage {
    /// Create a stage recognizing the default extensions.
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }

    /// Create a stage recognizing a custom extension set.
    ///
    /// The declaration order is kept: it becomes the contribution order in
    /// the resolved extension list.
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    fn recognizes(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}

impl Default for MarkdownStage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreprocessStage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Expand
    }

    fn added_extensions(&self) -> &[String] {
        &self.extensions
    }

    fn transform(&self, source: &str, extension: &str) -> Result<String, StageError> {
        if !self.recognizes(extension) {
            return Ok(source.to_string());
        }

        let (_, content) = extract_frontmatter(source)?;

        Ok(render_markup(content))
    }

    fn descriptor(&self) -> StageDescriptor {
        StageDescriptor {
            name: self.name().to_string(),
            phase: self.phase(),
            extensions: self.extensions.clone(),
            options: None,
        }
    }
}

/// Render a markdown body to markup.
fn render_markup(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_default_extensions_in_order() {
        let stage = MarkdownStage::new();

        assert_eq!(stage.phase(), StagePhase::Expand);
        assert_eq!(stage.added_extensions(), &[".svelte.md", ".md", ".svx"]);
    }

    #[test]
    fn renders_markdown_documents_to_markup() {
        let stage = MarkdownStage::new();

        let output = stage.transform("# Welcome\n\nSome *text*.", ".md").unwrap();

        assert!(output.contains("<h1>Welcome</h1>"));
        assert!(output.contains("<em>text</em>"));
    }

    #[test]
    fn strips_frontmatter_before_rendering() {
        let stage = MarkdownStage::new();
        let source = "---\ntitle: Post\n---\n\n# Post body\n";

        let output = stage.transform(source, ".svx").unwrap();

        assert!(output.contains("<h1>Post body</h1>"));
        assert!(!output.contains("title:"));
    }

    #[test]
    fn passes_unrecognized_extensions_through() {
        let stage = MarkdownStage::new();
        let source = "<h1>Already markup</h1>";

        let output = stage.transform(source, ".svelte").unwrap();

        assert_eq!(output, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let stage = MarkdownStage::new();
        let source = "---\ntitle: Broken\n# Body without closing";

        let result = stage.transform(source, ".md");

        assert!(matches!(result, Err(StageError::Frontmatter(_))));
    }

    #[test]
    fn recognizes_custom_extension_set() {
        let stage = MarkdownStage::with_extensions(vec![".markdown".to_string()]);

        assert_eq!(stage.added_extensions(), &[".markdown"]);
        let output = stage.transform("# Custom", ".markdown").unwrap();
        assert!(output.contains("<h1>Custom</h1>"));

        // The defaults no longer apply.
        let untouched = stage.transform("# Not mine", ".md").unwrap();
        assert_eq!(untouched, "# Not mine");
    }

    #[test]
    fn descriptor_carries_extensions_and_no_options() {
        let descriptor = MarkdownStage::new().descriptor();

        assert_eq!(descriptor.name, "markdown");
        assert_eq!(descriptor.phase, StagePhase::Expand);
        assert_eq!(descriptor.extensions, &[".svelte.md", ".md", ".svx"]);
        assert!(descriptor.options.is_none());
    }
}
