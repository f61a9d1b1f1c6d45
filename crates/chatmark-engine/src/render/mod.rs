//! # Rendering
//!
//! The presentation boundary: maps formatted segments and highlight spans to
//! markup. Captured text is escaped here and nowhere else.

pub mod html;
pub mod options;

pub use html::{render_highlight, render_message};
pub use options::HtmlOptions;
