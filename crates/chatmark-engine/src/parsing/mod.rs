pub mod blocks;
pub mod inline;
pub mod segments;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::Block;
use segments::{SegmentKind, split_segments};

/// A formatted message segment, ready for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderableSegment {
    /// A fenced code block.
    Code {
        language: Option<String>,
        code: String,
    },
    /// Prose, classified into blocks.
    Prose { blocks: Vec<Block> },
}

/// Formats a chat message into code and prose segments.
///
/// Never fails: malformed markup degrades to literal text.
pub fn format_message(message: &str) -> Vec<RenderableSegment> {
    let segments = split_segments(message);
    log::debug!(
        "formatting message of {} bytes into {} segments",
        message.len(),
        segments.len()
    );

    segments
        .into_iter()
        .map(|segment| match segment.kind {
            SegmentKind::Code { language, code } => RenderableSegment::Code { language, code },
            SegmentKind::Prose => {
                let blocks = blocks::classify(segment.source(message));
                log::trace!("prose segment {:?} -> {} blocks", segment.span, blocks.len());
                RenderableSegment::Prose { blocks }
            }
        })
        .collect()
}
