use crate::parsing::{
    blocks::Block,
    segments::{CodeFence, Segment, SegmentKind},
};

/// Validates segmentation invariants.
///
/// Asserts that:
/// - Segment spans are in bounds, contiguous, and cover the whole message
/// - Code segments start and end with a fence
/// - Prose segments are never empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(message: &str, segments: &[Segment]) {
    let n = message.len();
    let mut expected_start = 0;
    for s in segments {
        assert!(
            s.span.start <= s.span.end && s.span.end <= n,
            "segment span out of bounds: {:?} (message len: {})",
            s.span,
            n
        );
        assert_eq!(
            s.span.start, expected_start,
            "segment spans not contiguous at {:?}",
            s.span
        );
        let source = s.source(message);
        match &s.kind {
            SegmentKind::Code { .. } => assert!(
                source.len() >= 2 * CodeFence::BACKTICKS.len()
                    && source.starts_with(CodeFence::BACKTICKS)
                    && source.ends_with(CodeFence::BACKTICKS),
                "code segment without fences: {source:?}"
            ),
            SegmentKind::Prose => assert!(!source.is_empty(), "empty prose segment"),
        }
        expected_start = s.span.end;
    }
    assert_eq!(expected_start, n, "segments do not cover the message");
}

/// Validates block invariants for one prose segment.
///
/// # Panics
/// Panics if a list block has no items.
pub fn check_blocks(blocks: &[Block]) {
    for b in blocks {
        if let Block::List(list) = b {
            assert!(!list.items.is_empty(), "empty list block");
        }
    }
}
