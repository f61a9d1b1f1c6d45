use serde::{Deserialize, Serialize};

/// Presentation attributes used by the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Inline `style` for `<code>` spans.
    pub code_style: String,
    /// Inline `style` for links.
    pub link_style: String,
    /// `target` attribute for links. Empty omits the attribute.
    pub link_target: String,
    /// Class wrapping matched search text.
    pub highlight_class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            code_style: "background: #f1f3f4; padding: 2px 4px; border-radius: 3px; \
                         font-family: monospace; font-size: 0.9em;"
                .to_string(),
            link_style: "color: #667eea; text-decoration: underline;".to_string(),
            link_target: "_blank".to_string(),
            highlight_class: "search-highlight".to_string(),
        }
    }
}
