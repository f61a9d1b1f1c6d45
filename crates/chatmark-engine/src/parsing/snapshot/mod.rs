//! # Snapshot Testing Support
//!
//! Utilities for testing the formatter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts segments and blocks to a stable, serializable `Snap`
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for formatter correctness (spans in bounds,
//!   contiguous, lossless, fences where code segments claim them)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
