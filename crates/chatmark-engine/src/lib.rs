//! Structured formatting for chat message text.
//!
//! [`format`] turns a raw message into code and prose segments, with prose
//! classified into headings, paragraphs, lists and blank lines and every
//! line inline-formatted. [`highlight`] splits text around search matches.
//! All of it is pure and total: any input string has an output.

pub mod parsing;
pub mod render;
pub mod search;

// Re-export key types for easier usage
pub use parsing::{
    RenderableSegment,
    blocks::{Block, List, ListKind},
    inline::{Span, format_inline},
    segments::{Segment, SegmentKind, split_segments},
};
pub use render::HtmlOptions;
pub use search::{
    ChatEntry, HighlightMode, HighlightSpan, Searchable, filter_history, highlight,
    highlight_with,
};

/// Formats a chat message into renderable segments.
pub fn format(message: &str) -> Vec<RenderableSegment> {
    parsing::format_message(message)
}

/// Classifies a prose string into blocks.
pub fn classify(prose: &str) -> Vec<Block> {
    parsing::blocks::classify(prose)
}
