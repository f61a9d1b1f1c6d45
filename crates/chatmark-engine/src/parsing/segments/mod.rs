//! # Segmentation
//!
//! First phase of message formatting: the raw message is cut into an
//! ordered sequence of code-fence and prose segments.
//!
//! ## Key Invariants
//!
//! - Segment spans are contiguous and cover the whole message, so slicing
//!   the message with each span in order reproduces it exactly
//! - Fenced blocks are raw zones: no block or inline parsing inside
//! - An unterminated fence is ordinary prose text
//! - Empty prose chunks are dropped

pub mod fence;

use serde::Serialize;

use crate::parsing::span::ByteSpan;

pub use fence::CodeFence;

/// What a segment holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    /// A fenced code block with its fences stripped.
    Code {
        /// Language tag from the opening fence line, if any.
        language: Option<String>,
        /// Code body without the language line.
        code: String,
    },
    /// Prose text, to be classified line by line.
    Prose,
}

/// A top-level chunk of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Byte span of the chunk in the message, fences included.
    pub span: ByteSpan,
    pub kind: SegmentKind,
}

impl Segment {
    /// Returns the source text of this segment.
    pub fn source<'a>(&self, message: &'a str) -> &'a str {
        self.span.slice(message)
    }
}

/// Splits a message into code-fence and prose segments, in source order.
pub fn split_segments(message: &str) -> Vec<Segment> {
    let mut out = vec![];
    let mut prose_start = 0;

    fn flush_prose(out: &mut Vec<Segment>, start: usize, end: usize) {
        let span = ByteSpan::new(start, end);
        if !span.is_empty() {
            out.push(Segment {
                span,
                kind: SegmentKind::Prose,
            });
        }
    }

    for m in CodeFence::block_regex().find_iter(message) {
        flush_prose(&mut out, prose_start, m.start());

        let fence_len = CodeFence::BACKTICKS.len();
        let inner = &message[m.start() + fence_len..m.end() - fence_len];
        let (language, code) = CodeFence::split_info(inner);
        out.push(Segment {
            span: ByteSpan::new(m.start(), m.end()),
            kind: SegmentKind::Code { language, code },
        });
        prose_start = m.end();
    }

    flush_prose(&mut out, prose_start, message.len());
    out
}
