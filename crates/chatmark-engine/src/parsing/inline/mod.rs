//! # Inline Formatting
//!
//! Ordered substitution passes over a single line of text.
//!
//! ## Architecture
//!
//! Inline formatting runs on the text of headings, paragraphs and list items.
//! Four passes run in a fixed order (code span, bold, italic, link). Each pass
//! splits only the `Span::Text` pieces left by earlier passes, so anything an
//! earlier pass claimed is a raw zone for later ones and spans never nest.
//! Link labels are located on the whole line first; code and emphasis found
//! entirely inside a label are left alone so the link pass still sees the
//! full `[label](href)`, and the label keeps only its visible text.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Code, Bold, Italic, Link)
//! - **`kinds`**: Per-construct matchers with their owned patterns
//! - **`parser`**: `format_inline()` entry point and the pass pipeline

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::{Span, plain_text};
