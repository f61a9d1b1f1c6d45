use std::sync::LazyLock;

use regex::Regex;

use super::{InlineMatch, Span};

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"));

/// Code span inline type, `` `code` ``.
pub struct CodeSpan;

impl CodeSpan {
    /// Finds the next code span starting at or after byte `at`.
    pub fn find(s: &str, at: usize) -> Option<InlineMatch> {
        let caps = CODE_SPAN.captures_at(s, at)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            range: full.range(),
            span: Span::Code(caps[1].to_string()),
        })
    }
}
