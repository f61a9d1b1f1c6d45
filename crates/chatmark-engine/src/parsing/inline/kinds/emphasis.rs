use std::sync::LazyLock;

use regex::Regex;

use super::{InlineMatch, Span};

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"));

// A lone `*` pair: lookaround keeps `**` runs and stray stars out.
static ITALIC: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?<!\*)\*([^*]+)\*(?!\*)").expect("Invalid italic regex")
});

/// Emphasis inline types (`**bold**` and `*italic*`).
pub struct Emphasis;

impl Emphasis {
    /// Finds the next `**bold**` run starting at or after byte `at`.
    pub fn find_bold(s: &str, at: usize) -> Option<InlineMatch> {
        let caps = BOLD.captures_at(s, at)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            range: full.range(),
            span: Span::Bold(caps[1].to_string()),
        })
    }

    /// Finds the next `*italic*` run starting at or after byte `at`.
    ///
    /// The lookbehind sees the text before `at`, so a star directly after a
    /// previous match still counts as adjacent.
    pub fn find_italic(s: &str, at: usize) -> Option<InlineMatch> {
        let caps = match ITALIC.captures_from_pos(s, at) {
            Ok(caps) => caps?,
            Err(e) => {
                log::warn!("italic match aborted: {e}");
                return None;
            }
        };
        let full = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(InlineMatch {
            range: full.start()..full.end(),
            span: Span::Italic(inner.as_str().to_string()),
        })
    }
}
