//! # Block Parsing
//!
//! Two-phase classification of prose text into blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from local facts only (heading marker, bold run, list marker,
//!    blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` carries the open list
//!    run and emits `Block`s as lines arrive
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `List`, `ListKind`)
//! - **`kinds`**: Line kinds with owned marker patterns (Heading, BoldParagraph, ListMarker)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every line yields exactly one block, except list items, which merge
//!   into the list run they belong to
//! - List blocks are never empty
//! - Consecutive items of different kinds form separate lists

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{Block, List, ListKind};

/// Classifies prose text into an ordered sequence of [`Block`]s.
///
/// Lines are split on `'\n'` and none are dropped: a trailing newline yields
/// a final `Block::Blank`, and empty input yields a single `Block::Blank`.
pub fn classify(prose: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in prose.split('\n') {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::Span;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<Span> {
        vec![Span::text(s)]
    }

    #[test]
    fn heading_level_three() {
        assert_eq!(
            classify("### Title"),
            vec![Block::Heading {
                level: 3,
                content: text("Title"),
            }]
        );
    }

    #[test]
    fn ordered_run_then_paragraph() {
        assert_eq!(
            classify("1. first\n2. second\nplain"),
            vec![
                Block::List(List {
                    kind: ListKind::Ordered,
                    items: vec![text("first"), text("second")],
                }),
                Block::Paragraph {
                    content: text("plain"),
                },
            ]
        );
    }

    #[test]
    fn mixed_list_types_are_not_merged() {
        assert_eq!(
            classify("- a\n1. b"),
            vec![
                Block::List(List {
                    kind: ListKind::Unordered,
                    items: vec![text("a")],
                }),
                Block::List(List {
                    kind: ListKind::Ordered,
                    items: vec![text("b")],
                }),
            ]
        );
    }

    #[test]
    fn empty_prose_is_single_blank() {
        assert_eq!(classify(""), vec![Block::Blank]);
    }

    #[test]
    fn trailing_newline_keeps_one_blank() {
        assert_eq!(
            classify("hello\n"),
            vec![
                Block::Paragraph {
                    content: text("hello"),
                },
                Block::Blank,
            ]
        );
    }

    #[test]
    fn bold_line_interrupts_list() {
        let blocks = classify("- a\n- **b** c\n- d");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::List(l) if l.items.len() == 1));
        assert_eq!(
            blocks[1],
            Block::BoldParagraph {
                content: vec![
                    Span::text("- "),
                    Span::Bold("b".into()),
                    Span::text(" c"),
                ],
            }
        );
        assert!(matches!(&blocks[2], Block::List(l) if l.items.len() == 1));
    }

    #[test]
    fn list_items_are_inline_formatted() {
        assert_eq!(
            classify("* use `x` and [y](z)"),
            vec![Block::List(List {
                kind: ListKind::Unordered,
                items: vec![vec![
                    Span::text("use "),
                    Span::Code("x".into()),
                    Span::text(" and "),
                    Span::Link {
                        href: "z".into(),
                        label: "y".into(),
                    },
                ]],
            })]
        );
    }

    #[test]
    fn crlf_lines_classify_like_lf() {
        assert_eq!(classify("## A\r\n- b\r\n"), classify("## A\n- b\n"));
    }
}
