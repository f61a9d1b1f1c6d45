use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub text: String,
    /// Whether this piece matched the query.
    pub matched: bool,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// How a search query is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// The query is a literal substring; pattern metacharacters match themselves.
    #[default]
    Literal,
    /// The query is a regular expression (lookaround supported).
    ///
    /// Invalid patterns fall back to literal matching.
    Pattern,
}

/// Highlights case-insensitive literal occurrences of `query` in `text`.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    highlight_with(text, query, HighlightMode::Literal)
}

/// Splits `text` into matched and unmatched pieces for `query`.
///
/// Matching is case-insensitive. Concatenating the returned texts always
/// reproduces `text`. An empty query returns the whole text unmatched.
pub fn highlight_with(text: &str, query: &str, mode: HighlightMode) -> Vec<HighlightSpan> {
    if query.is_empty() {
        return vec![HighlightSpan::plain(text)];
    }

    let ranges = match mode {
        HighlightMode::Literal => literal_matches(text, query),
        HighlightMode::Pattern => pattern_matches(text, query).unwrap_or_else(|e| {
            log::warn!("invalid search pattern {query:?}, matching literally: {e}");
            literal_matches(text, query)
        }),
    };

    split_at_matches(text, &ranges)
}

fn literal_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let re = regex::RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build();
    match re {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(e) => {
            log::warn!("search query too large to match: {e}");
            vec![]
        }
    }
}

fn pattern_matches(text: &str, query: &str) -> Result<Vec<Range<usize>>, fancy_regex::Error> {
    let re = fancy_regex::Regex::new(&format!("(?i){query}"))?;
    re.find_iter(text)
        .map(|m| m.map(|m| m.start()..m.end()))
        .collect()
}

/// Emits alternating pieces around non-empty, ordered, non-overlapping ranges.
fn split_at_matches(text: &str, ranges: &[Range<usize>]) -> Vec<HighlightSpan> {
    let mut out = vec![];
    let mut last = 0;
    for range in ranges.iter().filter(|r| !r.is_empty()) {
        if range.start > last {
            out.push(HighlightSpan::plain(&text[last..range.start]));
        }
        out.push(HighlightSpan::matched(&text[range.clone()]));
        last = range.end;
    }
    if last < text.len() || out.is_empty() {
        out.push(HighlightSpan::plain(&text[last..]));
    }
    out
}
