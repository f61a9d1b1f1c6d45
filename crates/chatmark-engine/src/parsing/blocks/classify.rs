use super::{
    kinds::{BoldParagraph, Heading, ListMarker},
    types::ListKind,
};

/// Classification of a single prose line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A heading with the text after its marker.
    Heading { level: u8, text: &'a str },
    /// A line holding a `**...**` run; carries the whole line.
    BoldParagraph(&'a str),
    /// A list item with the text after its marker.
    ListItem { kind: ListKind, text: &'a str },
    /// Whitespace only.
    Blank,
    /// Anything else; carries the whole line.
    Paragraph(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Tests run in a fixed priority order and the first match wins:
    /// heading, bold paragraph, ordered item, unordered item, then blank or
    /// paragraph. A bold line that also looks like a list item is therefore
    /// a bold paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }
        if BoldParagraph::matches(line) {
            return LineClass::BoldParagraph(line);
        }
        if let Some((kind, text)) = ListMarker::strip(line) {
            return LineClass::ListItem { kind, text };
        }
        if line.trim().is_empty() {
            LineClass::Blank
        } else {
            LineClass::Paragraph(line)
        }
    }
}
