//! # Search
//!
//! Search-term support for the chat history sidebar.
//!
//! - **`highlight`**: splits text into matched and unmatched pieces for a query
//! - **`filter`**: selects history entries whose title or messages contain a query

pub mod filter;
pub mod highlight;

pub use filter::{ChatEntry, Searchable, filter_history};
pub use highlight::{HighlightMode, HighlightSpan, highlight, highlight_with};
