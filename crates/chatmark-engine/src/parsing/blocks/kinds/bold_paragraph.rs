use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::Span;

static BOLD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.*?\*\*").expect("Invalid bold run regex"));
static BOLD_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold fragment regex"));

/// A line rendered as an emphasised paragraph because it holds a `**...**` run.
pub struct BoldParagraph;

impl BoldParagraph {
    pub fn matches(line: &str) -> bool {
        BOLD_RUN.is_match(line)
    }

    /// Splits the whole line into `Bold` and `Text` spans.
    ///
    /// Text fragments are kept literally; no other inline formatting applies.
    pub fn split(line: &str) -> Vec<Span> {
        let mut out = vec![];
        let mut text_start = 0;
        for caps in BOLD_FRAGMENT.captures_iter(line) {
            let Some(full) = caps.get(0) else { continue };
            if full.start() > text_start {
                out.push(Span::text(&line[text_start..full.start()]));
            }
            out.push(Span::Bold(caps[1].to_string()));
            text_start = full.end();
        }
        if text_start < line.len() {
            out.push(Span::text(&line[text_start..]));
        }
        out
    }
}
