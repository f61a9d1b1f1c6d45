use anyhow::Result;
use chatmark_engine::{ChatEntry, HighlightMode, filter_history, format, highlight_with};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use std::io::Stdout;

use crate::render::{highlight_line, message_lines};

pub struct App {
    entries: Vec<ChatEntry>,
    /// Indices into `entries` that pass the current query, in order.
    visible: Vec<usize>,
    list_state: ListState,
    query: String,
    searching: bool,
    mode: HighlightMode,
    current_content: Vec<Line<'static>>,
}

impl App {
    pub fn new(entries: Vec<ChatEntry>, mode: HighlightMode) -> Self {
        let mut app = Self {
            entries,
            visible: Vec::new(),
            list_state: ListState::default(),
            query: String::new(),
            searching: false,
            mode,
            current_content: Vec::new(),
        };
        app.refilter();
        app
    }

    fn refilter(&mut self) {
        let mut kept = filter_history(&self.entries, &self.query).into_iter().peekable();
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                if kept.peek().is_some_and(|k| std::ptr::eq(*k, entry)) {
                    kept.next();
                    Some(i)
                } else {
                    None
                }
            })
            .collect();

        self.list_state
            .select(if self.visible.is_empty() { None } else { Some(0) });
        self.update_content_for_selection();
    }

    fn selected_entry(&self) -> Option<&ChatEntry> {
        let index = self.list_state.selected()?;
        self.entries.get(*self.visible.get(index)?)
    }

    fn next_entry(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_entry(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = match self.selected_entry() {
            Some(entry) => {
                let mut lines = Vec::new();
                for message in &entry.messages {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    lines.extend(message_lines(&format(message)));
                }
                lines
            }
            None => Vec::new(),
        };
    }

    fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    fn pop_query(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    fn clear_search(&mut self) {
        self.searching = false;
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    /// Applies one key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.searching {
            match code {
                KeyCode::Esc => self.clear_search(),
                KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => self.pop_query(),
                KeyCode::Down => self.next_entry(),
                KeyCode::Up => self.previous_entry(),
                KeyCode::Char(c) => self.push_query(c),
                _ => {}
            }
            return true;
        }

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Down | KeyCode::Char('j') => self.next_entry(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_entry(),
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Esc => self.clear_search(),
            _ => {}
        }
        true
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // History panel
    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&i| app.entries.get(i))
        .map(|entry| {
            ListItem::new(highlight_line(&highlight_with(
                &entry.title,
                &app.query,
                app.mode,
            )))
        })
        .collect();

    let title = if app.query.is_empty() && !app.searching {
        "History".to_string()
    } else {
        format!("History /{}", app.query)
    };
    let history = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));

    f.render_stateful_widget(history, chunks[0], &mut app.list_state);

    // Message panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No matching transcripts")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Message"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = if app.searching {
        Line::from(vec![
            Span::raw("Type to search | "),
            Span::raw("Enter: Done | "),
            Span::raw("Esc: Clear"),
        ])
    } else {
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("/: Search | Esc: Clear search"),
        ])
    };

    f.render_widget(Paragraph::new(help), rows[1]);
}
