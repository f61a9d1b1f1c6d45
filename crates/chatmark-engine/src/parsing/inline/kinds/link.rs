use std::sync::LazyLock;

use regex::Regex;

use std::ops::Range;

use super::{InlineMatch, Span};
use crate::parsing::inline::{format_inline, plain_text};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));

/// Inline link type, `[label](href)`.
pub struct InlineLink;

impl InlineLink {
    /// Finds the next inline link starting at or after byte `at`.
    ///
    /// The label keeps the visible text of any markup inside it.
    pub fn find(s: &str, at: usize) -> Option<InlineMatch> {
        let caps = LINK.captures_at(s, at)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            range: full.range(),
            span: Span::Link {
                label: plain_text(&format_inline(&caps[1])),
                href: caps[2].to_string(),
            },
        })
    }

    /// Byte ranges of every link label in `s`.
    pub fn label_ranges(s: &str) -> Vec<Range<usize>> {
        LINK.captures_iter(s)
            .filter_map(|caps| caps.get(1))
            .map(|label| label.range())
            .collect()
    }
}
