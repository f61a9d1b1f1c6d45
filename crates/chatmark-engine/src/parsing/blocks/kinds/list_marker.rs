use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered marker regex"));
static UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s").expect("Invalid unordered marker regex"));
static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("Invalid ordered prefix regex"));
static UNORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s*").expect("Invalid unordered prefix regex"));

/// List item markers. Indentation is ignored; lists do not nest.
pub struct ListMarker;

impl ListMarker {
    /// Returns the list kind and the item text after the marker.
    ///
    /// Ordered markers are tested before unordered ones.
    pub fn strip(line: &str) -> Option<(ListKind, &str)> {
        let trimmed = line.trim();
        let (kind, prefix) = if ORDERED.is_match(trimmed) {
            (ListKind::Ordered, &*ORDERED_PREFIX)
        } else if UNORDERED.is_match(trimmed) {
            (ListKind::Unordered, &*UNORDERED_PREFIX)
        } else {
            return None;
        };
        let start = line.trim_start();
        let marker_end = prefix.find(start).map_or(0, |m| m.end());
        Some((kind, &start[marker_end..]))
    }
}
