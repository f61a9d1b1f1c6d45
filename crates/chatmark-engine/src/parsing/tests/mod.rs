//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; each is checked against the segment
//! invariants and a few structural expectations.

use pretty_assertions::assert_eq;

use crate::parsing::{
    RenderableSegment,
    blocks::{Block, ListKind},
    format_message,
    inline::Span,
    segments::{SegmentKind, split_segments},
    snapshot,
};

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn assert_invariants(message: &str) -> Vec<RenderableSegment> {
    let segments = split_segments(message);
    snapshot::invariants(message, &segments);
    let rebuilt: String = segments.iter().map(|s| s.source(message)).collect();
    assert_eq!(rebuilt, message);

    let formatted = format_message(message);
    for segment in &formatted {
        if let RenderableSegment::Prose { blocks } = segment {
            snapshot::invariants::check_blocks(blocks);
        }
    }
    formatted
}

// Fixture-based tests

#[test]
fn fixture_assistant_answer() {
    let md = load_fixture("assistant_answer");
    let formatted = assert_invariants(&md);

    assert_eq!(formatted.len(), 3);
    let RenderableSegment::Prose { blocks } = &formatted[0] else {
        panic!("expected prose first");
    };
    assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
    let list = blocks
        .iter()
        .find_map(|b| match b {
            Block::List(l) => Some(l),
            _ => None,
        })
        .unwrap();
    assert_eq!(list.kind, ListKind::Ordered);
    assert_eq!(list.items.len(), 3);
    assert!(blocks.iter().any(|b| matches!(b, Block::BoldParagraph { .. })));

    assert_eq!(
        formatted[1],
        RenderableSegment::Code {
            language: Some("rust".into()),
            code: "fn main() {\n    println!(\"hello\");\n}".into(),
        }
    );

    let RenderableSegment::Prose { blocks } = &formatted[2] else {
        panic!("expected prose last");
    };
    // Two blank lines follow the closing fence
    assert_eq!(blocks[..2], [Block::Blank, Block::Blank]);
    assert!(matches!(blocks[2], Block::Heading { level: 3, .. }));
    assert!(matches!(&blocks[3], Block::List(l) if l.kind == ListKind::Unordered));
}

#[test]
fn fixture_unterminated_fence() {
    let md = load_fixture("unterminated_fence");
    let segments = split_segments(&md);
    snapshot::invariants(&md, &segments);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, SegmentKind::Prose);

    let formatted = format_message(&md);
    let RenderableSegment::Prose { blocks } = &formatted[0] else {
        panic!("expected prose");
    };
    assert!(blocks.contains(&Block::Paragraph {
        content: vec![Span::text("```python")],
    }));
}

#[test]
fn fixture_mixed_lists() {
    let md = load_fixture("mixed_lists");
    let formatted = assert_invariants(&md);
    let RenderableSegment::Prose { blocks } = &formatted[0] else {
        panic!("expected prose");
    };
    let kinds: Vec<_> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::List(l) => Some((l.kind, l.items.len())),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ListKind::Unordered, 2),
            (ListKind::Ordered, 2),
            (ListKind::Unordered, 1),
        ]
    );
    assert!(matches!(blocks[3], Block::Paragraph { .. }));
    assert_eq!(blocks[4], Block::Blank);
}

// Snapshot tests

#[test]
fn heading_and_list_snapshot() {
    let blocks = crate::parsing::blocks::classify("### Title\n- a\n- *b*");
    insta::assert_compact_debug_snapshot!(
        blocks,
        @r#"[Heading { level: 3, content: [Text("Title")] }, List(List { kind: Unordered, items: [[Text("a")], [Italic("b")]] })]"#
    );
}

#[test]
fn code_segment_snapshot() {
    insta::assert_compact_debug_snapshot!(
        format_message("```js\nconsole.log(1)\n```"),
        @r#"[Code { language: Some("js"), code: "console.log(1)" }]"#
    );
}

#[test]
fn normalized_segments() {
    let message = "Intro\n```sh\nls\n```";
    let snap = snapshot::normalize(message, &split_segments(message));

    let kinds: Vec<&str> = snap.segments.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Prose", "Code(sh)"]);
    assert_eq!(snap.segments[0].span, (0, 6));
    assert_eq!(snap.segments[1].span, (6, message.len()));
    assert_eq!(
        snap.segments[0].blocks,
        vec![
            Block::Paragraph {
                content: vec![Span::text("Intro")],
            },
            Block::Blank,
        ]
    );
    assert!(snap.segments[1].blocks.is_empty());
}

// Invariant tests

/// Round-trip over awkward inputs: concatenated segment sources equal the input.
#[test]
fn lossless_segmentation() {
    let inputs = [
        "",
        "```",
        "``````",
        "```\n```",
        "a```b```c```d",
        "\n\n```x\n\n```\n\n",
        "émoji 🦀 ```rs\nlet 🦀 = 1;\n``` fin",
        "````four````",
    ];
    for input in inputs {
        assert_invariants(input);
    }
}

/// Empty message produces no segments.
#[test]
fn empty_message() {
    assert!(format_message("").is_empty());
}

/// Blank lines between code blocks survive as blank blocks.
#[test]
fn blank_lines_between_code_blocks() {
    let formatted = format_message("```a\n1\n```\n\n```b\n2\n```");
    assert_eq!(formatted.len(), 3);
    assert_eq!(
        formatted[1],
        RenderableSegment::Prose {
            blocks: vec![Block::Blank, Block::Blank, Block::Blank],
        }
    );
}
