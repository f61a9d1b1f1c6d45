use std::ops::Range;

use super::{
    kinds::{CodeSpan, Emphasis, InlineLink, InlineMatch},
    types::Span,
};

/// Finds the next construct of one kind at or after a byte offset.
type Matcher = fn(&str, usize) -> Option<InlineMatch>;

/// Substitution passes in precedence order.
///
/// Each pass only sees text left unclaimed by the passes before it, so code
/// spans suppress emphasis and links inside them, bold claims `**` before
/// italic can look at single stars, and so on. Matches lying wholly inside
/// a link label are skipped, which leaves the link intact for the last pass.
const PASSES: [Matcher; 4] = [
    CodeSpan::find,
    Emphasis::find_bold,
    Emphasis::find_italic,
    InlineLink::find,
];

/// A piece of the line during formatting: unclaimed source text, or a span
/// some pass already produced.
enum Piece {
    Text(Range<usize>),
    Claimed(Span),
}

/// Formats one line of text into a sequence of [`Span`]s.
///
/// Text between constructs is emitted as `Span::Text`; empty text spans are
/// never produced, so an empty input yields an empty sequence. Unclosed
/// delimiters stay literal text.
pub fn format_inline(text: &str) -> Vec<Span> {
    if text.is_empty() {
        return vec![];
    }
    let labels = InlineLink::label_ranges(text);
    PASSES
        .iter()
        .fold(vec![Piece::Text(0..text.len())], |pieces, matcher| {
            apply_pass(text, pieces, *matcher, &labels)
        })
        .into_iter()
        .map(|piece| match piece {
            Piece::Text(range) => Span::text(&text[range]),
            Piece::Claimed(span) => span,
        })
        .collect()
}

/// Runs one matcher over every unclaimed text piece.
fn apply_pass(
    line: &str,
    pieces: Vec<Piece>,
    matcher: Matcher,
    labels: &[Range<usize>],
) -> Vec<Piece> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            Piece::Text(range) => split_text(line, range, matcher, labels, &mut out),
            claimed => out.push(claimed),
        }
    }
    out
}

fn split_text(
    line: &str,
    range: Range<usize>,
    matcher: Matcher,
    labels: &[Range<usize>],
    out: &mut Vec<Piece>,
) {
    // Helper to flush accumulated text as a Text piece
    fn flush_text(out: &mut Vec<Piece>, range: Range<usize>) {
        if !range.is_empty() {
            out.push(Piece::Text(range));
        }
    }

    let base = range.start;
    let text = &line[range.clone()];
    let mut text_start = 0;
    let mut at = 0;
    while let Some(m) = matcher(text, at) {
        at = m.range.end;
        if inside_label(base + m.range.start..base + m.range.end, labels) {
            continue;
        }
        flush_text(out, base + text_start..base + m.range.start);
        text_start = m.range.end;
        out.push(Piece::Claimed(m.span));
    }
    flush_text(out, base + text_start..range.end);
}

fn inside_label(found: Range<usize>, labels: &[Range<usize>]) -> bool {
    labels
        .iter()
        .any(|label| label.start <= found.start && found.end <= label.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn t(s: &str) -> Span {
        Span::text(s)
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(format_inline("hello world"), vec![t("hello world")]);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(format_inline("").is_empty());
    }

    #[test]
    fn all_four_constructs_in_order() {
        let spans = format_inline("Use `foo()` and **bold** and *italic* and [link](http://x)");
        assert_eq!(
            spans,
            vec![
                t("Use "),
                Span::Code("foo()".into()),
                t(" and "),
                Span::Bold("bold".into()),
                t(" and "),
                Span::Italic("italic".into()),
                t(" and "),
                Span::Link {
                    href: "http://x".into(),
                    label: "link".into(),
                },
            ]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(
            format_inline("`**not bold**`"),
            vec![Span::Code("**not bold**".into())]
        );
    }

    #[test]
    fn code_span_claims_text_before_italic_sees_it() {
        // The code pass runs first, leaving `*a ` without a closing star
        assert_eq!(
            format_inline("*a `b* c`"),
            vec![t("*a "), Span::Code("b* c".into())]
        );
    }

    #[test]
    fn bold_does_not_become_italic() {
        assert_eq!(
            format_inline("**strong** and *soft*"),
            vec![
                Span::Bold("strong".into()),
                t(" and "),
                Span::Italic("soft".into()),
            ]
        );
    }

    #[test]
    fn triple_star_leaves_outer_stars_literal() {
        assert_eq!(
            format_inline("***x***"),
            vec![t("*"), Span::Bold("x".into()), t("*")]
        );
    }

    #[test]
    fn bold_link_label_keeps_the_link() {
        assert_eq!(
            format_inline("See [**the docs**](https://docs.rs) now"),
            vec![
                t("See "),
                Span::Link {
                    href: "https://docs.rs".into(),
                    label: "the docs".into(),
                },
                t(" now"),
            ]
        );
    }

    #[test]
    fn code_link_label_keeps_the_link() {
        assert_eq!(
            format_inline("Call [`foo()`](https://x.io/foo)"),
            vec![
                t("Call "),
                Span::Link {
                    href: "https://x.io/foo".into(),
                    label: "foo()".into(),
                },
            ]
        );
    }

    #[test]
    fn code_span_around_link_stays_code() {
        assert_eq!(
            format_inline("`[a](b)` done"),
            vec![Span::Code("[a](b)".into()), t(" done")]
        );
    }

    #[test]
    fn bold_around_link_claims_it() {
        assert_eq!(
            format_inline("**read [a](b) first**"),
            vec![Span::Bold("read [a](b) first".into())]
        );
    }

    #[test]
    fn emphasis_after_link_still_applies() {
        assert_eq!(
            format_inline("[*x*](u) and *y*"),
            vec![
                Span::Link {
                    href: "u".into(),
                    label: "x".into(),
                },
                t(" and "),
                Span::Italic("y".into()),
            ]
        );
    }

    #[rstest]
    #[case("`unclosed code")]
    #[case("**unclosed bold")]
    #[case("*unclosed italic")]
    #[case("[label](missing-paren")]
    #[case("[label] (spaced)")]
    fn unclosed_constructs_stay_text(#[case] input: &str) {
        assert_eq!(format_inline(input), vec![t(input)]);
    }

    #[test]
    fn spaced_star_pair_is_still_italic() {
        assert_eq!(
            format_inline("a * b * c"),
            vec![t("a "), Span::Italic(" b ".into()), t(" c")]
        );
    }

    #[test]
    fn multiple_links() {
        let spans = format_inline("[a](1) and [b](2)");
        assert_eq!(spans.len(), 3);
        assert!(matches!(&spans[0], Span::Link { label, .. } if label == "a"));
        assert_eq!(spans[1], t(" and "));
        assert!(matches!(&spans[2], Span::Link { href, .. } if href == "2"));
    }

    #[test]
    fn unicode_text_is_preserved() {
        assert_eq!(
            format_inline("héllo **wörld** ✓"),
            vec![t("héllo "), Span::Bold("wörld".into()), t(" ✓")]
        );
    }
}
