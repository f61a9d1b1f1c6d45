//! # Block Kinds
//!
//! Line-level block types that own their marker patterns.
//!
//! - **`Heading`**: `## ` and `### ` prefixes
//! - **`BoldParagraph`**: lines holding a `**...**` run anywhere
//! - **`ListMarker`**: `1. ` ordered and `- `/`* ` unordered markers

pub mod bold_paragraph;
pub mod heading;
pub mod list_marker;

pub use bold_paragraph::BoldParagraph;
pub use heading::Heading;
pub use list_marker::ListMarker;
