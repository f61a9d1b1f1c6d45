/// Something the history sidebar can search.
pub trait Searchable {
    fn title(&self) -> &str;

    /// Message bodies belonging to the entry.
    fn bodies(&self) -> impl Iterator<Item = &str>;
}

/// A chat history entry: a title and its message bodies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatEntry {
    pub title: String,
    pub messages: Vec<String>,
}

impl ChatEntry {
    pub fn new(title: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }
}

impl Searchable for ChatEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn bodies(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }
}

/// Returns the entries whose title or any message contains `query`.
///
/// Matching is a case-insensitive literal substring test. A query that is
/// empty or whitespace-only keeps every entry.
pub fn filter_history<'a, T: Searchable>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return entries.iter().collect();
    }

    let needle = query.to_lowercase();
    let contains = |s: &str| s.to_lowercase().contains(&needle);
    entries
        .iter()
        .filter(|entry| contains(entry.title()) || entry.bodies().any(contains))
        .collect()
}
