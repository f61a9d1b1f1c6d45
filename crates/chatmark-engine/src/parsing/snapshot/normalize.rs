use serde::Serialize;

use crate::parsing::{
    blocks::{self, Block},
    segments::{Segment, SegmentKind},
    span::preview,
};

#[derive(Serialize)]
pub struct Snap {
    pub segments: Vec<SegmentSnap>,
}

#[derive(Serialize)]
pub struct SegmentSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub blocks: Vec<Block>,
}

pub fn normalize(message: &str, segments: &[Segment]) -> Snap {
    let segments = segments
        .iter()
        .map(|s| {
            let (kind, blocks) = match &s.kind {
                SegmentKind::Code { language, .. } => (
                    format!("Code({})", language.as_deref().unwrap_or("")),
                    vec![],
                ),
                SegmentKind::Prose => ("Prose".to_string(), blocks::classify(s.source(message))),
            };
            SegmentSnap {
                kind,
                span: (s.span.start, s.span.end),
                text: preview(message, s.span, 60),
                blocks,
            }
        })
        .collect();

    Snap { segments }
}
