use std::sync::LazyLock;

use regex::Regex;

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+").expect("Invalid h3 regex"));
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+").expect("Invalid h2 regex"));

/// Heading block type. Only levels 2 and 3 are recognised.
pub struct Heading;

impl Heading {
    /// Returns the level and the text after the marker, if `line` is a heading.
    ///
    /// Level 3 is tested first; `#` and `####` lines are not headings.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        [(3, &*H3), (2, &*H2)]
            .into_iter()
            .find_map(|(level, re)| re.find(line).map(|m| (level, &line[m.end()..])))
    }
}
