//! Preprocessing stages for the gesso build pipeline.
//!
//! A stage is an ordered, named source-to-source transformation applied to
//! authored documents before compilation. Expand-phase stages widen the set
//! of recognized source extensions; Transform-phase stages rewrite the
//! already-expanded markup.

pub mod frontmatter;
pub mod markdown;
pub mod style;
pub mod traits;

pub use frontmatter::{extract_frontmatter, FrontmatterError};
pub use markdown::MarkdownStage;
pub use style::{StyleOptions, StyleStage};
pub use traits::{PreprocessStage, StageDescriptor, StageError, StagePhase};
