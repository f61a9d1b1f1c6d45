/// A byte range `[start, end)` into the message text.
///
/// Segments store spans rather than copied source text, enabling lossless
/// round-trip: slicing the message with every segment span in order
/// reproduces the exact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct ByteSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    ///
    /// The span must lie on char boundaries of `source`.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

/// Extracts text for a span, truncating to at most `max` bytes with "..." suffix if needed.
///
/// Truncation backs off to the nearest char boundary. Used for human-readable
/// snapshot output.
pub fn preview(source: &str, sp: ByteSpan, max: usize) -> String {
    let text = sp.slice(source);
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut s = text[..cut].to_string();
    s.push_str("...");
    s
}
