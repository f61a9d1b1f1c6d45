//! Loading saved chat transcripts from a directory.

use anyhow::{Context, Result};
use chatmark_engine::ChatEntry;
use std::path::Path;

const EXTENSIONS: &[&str] = &["md", "txt"];

/// Reads every `*.md` / `*.txt` file directly inside `dir` as one entry.
///
/// The file stem is the title and the whole file is the single message body.
/// Entries are sorted by title.
pub fn load_dir(dir: &Path) -> Result<Vec<ChatEntry>> {
    let mut entries = Vec::new();
    let read = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read transcripts directory {}", dir.display()))?;

    for item in read {
        let path = item?.path();
        if !path.is_file() || !has_transcript_extension(&path) {
            continue;
        }
        let Some(title) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript {}", path.display()))?;
        entries.push(ChatEntry::new(title, vec![body]));
    }

    entries.sort_by(|a, b| a.title.cmp(&b.title));
    log::debug!("loaded {} transcripts from {}", entries.len(), dir.display());
    Ok(entries)
}

fn has_transcript_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
