use crate::parsing::inline::{Span, format_inline};

use super::{
    classify::LineClass,
    kinds::BoldParagraph,
    types::{Block, List, ListKind},
};

/// The list currently being accumulated. Holds at least one item.
#[derive(Debug)]
struct ListRun {
    kind: ListKind,
    items: Vec<Vec<Span>>,
}

/// Phase 2 of block parsing: folds classified lines into [`Block`]s.
///
/// The only state carried between lines is the open list run. It is flushed
/// as a single `Block::List` whenever a non-item line arrives, the item kind
/// switches, or input ends.
pub struct BlockBuilder {
    run: Option<ListRun>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            run: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass<'_>) {
        let block = match class {
            LineClass::ListItem { kind, text } => {
                self.push_item(kind, format_inline(text));
                return;
            }
            LineClass::Heading { level, text } => Block::Heading {
                level,
                content: format_inline(text),
            },
            LineClass::BoldParagraph(line) => Block::BoldParagraph {
                content: BoldParagraph::split(line),
            },
            LineClass::Paragraph(line) => Block::Paragraph {
                content: format_inline(line),
            },
            LineClass::Blank => Block::Blank,
        };
        self.flush_list();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn push_item(&mut self, kind: ListKind, item: Vec<Span>) {
        if self.run.as_ref().is_some_and(|run| run.kind != kind) {
            self.flush_list();
        }
        self.run
            .get_or_insert_with(|| ListRun { kind, items: vec![] })
            .items
            .push(item);
    }

    fn flush_list(&mut self) {
        if let Some(ListRun { kind, items }) = self.run.take() {
            self.out.push(Block::List(List { kind, items }));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
