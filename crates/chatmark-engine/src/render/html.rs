use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::parsing::{
    RenderableSegment,
    blocks::{Block, List},
    inline::Span,
};
use crate::search::HighlightSpan;

use super::options::HtmlOptions;

/// Renders formatted segments to an HTML fragment.
pub fn render_message(segments: &[RenderableSegment], options: &HtmlOptions) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            RenderableSegment::Code { language, code } => {
                emit_code_block(language.as_deref(), code, &mut out)
            }
            RenderableSegment::Prose { blocks } => {
                out.push_str("<div class=\"text-content\">\n");
                for block in blocks {
                    emit_block(block, options, &mut out);
                    out.push('\n');
                }
                out.push_str("</div>\n");
            }
        }
    }
    out
}

/// Renders highlight spans, wrapping matched pieces in the highlight class.
pub fn render_highlight(spans: &[HighlightSpan], options: &HtmlOptions) -> String {
    let mut out = String::new();
    for span in spans {
        if span.matched {
            out.push_str("<span class=\"");
            encode_double_quoted_attribute_to_string(&options.highlight_class, &mut out);
            out.push_str("\">");
            encode_text_to_string(&span.text, &mut out);
            out.push_str("</span>");
        } else {
            encode_text_to_string(&span.text, &mut out);
        }
    }
    out
}

fn emit_code_block(language: Option<&str>, code: &str, out: &mut String) {
    out.push_str("<div class=\"code-block\">");
    if let Some(lang) = language {
        out.push_str("<div class=\"code-header\">");
        encode_text_to_string(lang, out);
        out.push_str("</div>");
    }
    out.push_str("<pre class=\"code-content\"><code>");
    encode_text_to_string(code, out);
    out.push_str("</code></pre></div>\n");
}

fn emit_block(block: &Block, options: &HtmlOptions, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            spans_to_html(content, options, out);
            out.push_str(&format!("</h{level}>"));
        }
        Block::BoldParagraph { content } => {
            out.push_str("<p class=\"bold-paragraph\">");
            spans_to_html(content, options, out);
            out.push_str("</p>");
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, options, out);
            out.push_str("</p>");
        }
        Block::List(list) => list_to_html(list, options, out),
        Block::Blank => out.push_str("<br />"),
    }
}

fn list_to_html(list: &List, options: &HtmlOptions, out: &mut String) {
    let tag = if list.ordered() { "ol" } else { "ul" };
    out.push_str(&format!("<{tag}>"));
    for item in &list.items {
        out.push_str("<li>");
        spans_to_html(item, options, out);
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
}

fn spans_to_html(spans: &[Span], options: &HtmlOptions, out: &mut String) {
    for span in spans {
        span_to_html(span, options, out);
    }
}

fn span_to_html(span: &Span, options: &HtmlOptions, out: &mut String) {
    match span {
        Span::Text(text) => {
            encode_text_to_string(text, out);
        }
        Span::Code(text) => {
            out.push_str("<code style=\"");
            encode_double_quoted_attribute_to_string(&options.code_style, out);
            out.push_str("\">");
            encode_text_to_string(text, out);
            out.push_str("</code>");
        }
        Span::Bold(text) => {
            out.push_str("<strong>");
            encode_text_to_string(text, out);
            out.push_str("</strong>");
        }
        Span::Italic(text) => {
            out.push_str("<em>");
            encode_text_to_string(text, out);
            out.push_str("</em>");
        }
        Span::Link { href, label } => {
            out.push_str("<a href=\"");
            encode_double_quoted_attribute_to_string(href, out);
            out.push('"');
            if !options.link_target.is_empty() {
                out.push_str(" target=\"");
                encode_double_quoted_attribute_to_string(&options.link_target, out);
                out.push('"');
            }
            out.push_str(" style=\"");
            encode_double_quoted_attribute_to_string(&options.link_style, out);
            out.push_str("\">");
            encode_text_to_string(label, out);
            out.push_str("</a>");
        }
    }
}
