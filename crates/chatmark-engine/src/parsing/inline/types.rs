use serde::Serialize;

/// An inline-formatted fragment of a line.
///
/// Spans never nest: each construct claims its source text exclusively and
/// its captured content is stored verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    Code(String),
    /// Strong emphasis, `**text**`.
    Bold(String),
    /// Emphasis, `*text*`.
    Italic(String),
    /// An inline link `[label](href)`. The label holds the visible text of
    /// any markup written inside it.
    Link { href: String, label: String },
}

impl Span {
    pub fn text(s: impl Into<String>) -> Self {
        Span::Text(s.into())
    }

    /// Returns the human-visible text of this span (link label for links).
    pub fn visible_text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Code(s) | Span::Bold(s) | Span::Italic(s) => s,
            Span::Link { label, .. } => label,
        }
    }
}

/// Concatenates the visible text of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::visible_text).collect()
}
