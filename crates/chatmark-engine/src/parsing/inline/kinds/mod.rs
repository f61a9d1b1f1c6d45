//! # Inline Kinds
//!
//! Inline-specific types that own their match patterns. The parser calls
//! these; it never hardcodes a delimiter.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `code` `` - claimed first, so nothing parses inside
//! - **`Emphasis`**: `**bold**` and `*italic*` (italic refuses a `*` on either side)
//! - **`InlineLink`**: `[label](href)`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::InlineLink;

use std::ops::Range;

use super::types::Span;

/// A construct found by one of the inline kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte range of the whole construct, delimiters included.
    pub range: Range<usize>,
    /// The span that replaces it.
    pub span: Span,
}
