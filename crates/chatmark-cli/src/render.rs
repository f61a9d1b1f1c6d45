//! Maps formatted messages to styled terminal lines.

use chatmark_engine::{Block, HighlightSpan, List, ListKind, RenderableSegment, Span};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as TextSpan},
};

pub fn message_lines(segments: &[RenderableSegment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for segment in segments {
        match segment {
            RenderableSegment::Code { language, code } => code_lines(&mut lines, language, code),
            RenderableSegment::Prose { blocks } => {
                for block in blocks {
                    block_lines(&mut lines, block);
                }
            }
        }
    }
    lines
}

fn code_lines(lines: &mut Vec<Line<'static>>, language: &Option<String>, code: &str) {
    let border = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(TextSpan::styled(
        format!("┌─ {}", language.as_deref().unwrap_or("code")),
        border,
    )));
    for line in code.split('\n') {
        lines.push(Line::from(vec![
            TextSpan::styled("│ ", border),
            TextSpan::styled(line.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines.push(Line::from(TextSpan::styled("└─", border)));
}

fn block_lines(lines: &mut Vec<Line<'static>>, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            let color = if *level == 2 {
                Color::Magenta
            } else {
                Color::LightMagenta
            };
            let base = Style::default().fg(color).add_modifier(Modifier::BOLD);
            lines.push(Line::from(inline_spans(content, base)));
        }
        Block::BoldParagraph { content } | Block::Paragraph { content } => {
            lines.push(Line::from(inline_spans(content, Style::default())));
        }
        Block::List(list) => list_lines(lines, list),
        Block::Blank => lines.push(Line::default()),
    }
}

fn list_lines(lines: &mut Vec<Line<'static>>, list: &List) {
    for (n, item) in list.items.iter().enumerate() {
        let marker = match list.kind {
            ListKind::Ordered => format!("  {}. ", n + 1),
            ListKind::Unordered => "  • ".to_string(),
        };
        let mut spans = vec![TextSpan::styled(marker, Style::default().fg(Color::Yellow))];
        spans.extend(inline_spans(item, Style::default()));
        lines.push(Line::from(spans));
    }
}

fn inline_spans(content: &[Span], base: Style) -> Vec<TextSpan<'static>> {
    let mut out = Vec::with_capacity(content.len());
    for span in content {
        match span {
            Span::Text(s) => out.push(TextSpan::styled(s.clone(), base)),
            Span::Code(s) => out.push(TextSpan::styled(
                s.clone(),
                base.fg(Color::Yellow).bg(Color::Black),
            )),
            Span::Bold(s) => out.push(TextSpan::styled(
                s.clone(),
                base.add_modifier(Modifier::BOLD),
            )),
            Span::Italic(s) => out.push(TextSpan::styled(
                s.clone(),
                base.add_modifier(Modifier::ITALIC),
            )),
            Span::Link { href, label } => {
                out.push(TextSpan::styled(
                    label.clone(),
                    base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ));
                out.push(TextSpan::styled(
                    format!(" <{href}>"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    out
}

/// Styles a highlighted title for the history list.
pub fn highlight_line(spans: &[HighlightSpan]) -> Line<'static> {
    let hit = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    Line::from(
        spans
            .iter()
            .map(|s| {
                if s.matched {
                    TextSpan::styled(s.text.clone(), hit)
                } else {
                    TextSpan::raw(s.text.clone())
                }
            })
            .collect::<Vec<_>>(),
    )
}
