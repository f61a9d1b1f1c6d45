use serde::Serialize;

use crate::parsing::inline::Span;

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `1. item`
    Ordered,
    /// `- item` or `* item`
    Unordered,
}

/// A run of consecutive list items of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub kind: ListKind,
    /// Inline content of each item, in order. Never empty.
    pub items: Vec<Vec<Span>>,
}

impl List {
    pub fn ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }
}

/// A top-level renderable unit of prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A `##` or `###` heading.
    Heading {
        /// 2 or 3.
        level: u8,
        content: Vec<Span>,
    },
    /// A line containing a `**...**` run, split into bold and plain text.
    BoldParagraph { content: Vec<Span> },
    /// Any other non-blank line.
    Paragraph { content: Vec<Span> },
    List(List),
    /// An empty or whitespace-only line.
    Blank,
}
