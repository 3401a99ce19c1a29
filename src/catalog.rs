//! Item catalog loading.
//!
//! The parser does not care where the catalog comes from; this module is the
//! file-backed collaborator: one `id,name` pair per line, names may contain
//! commas (the split is on the first comma only). Blank lines are skipped.

use crate::index::VocabIndex;
use crate::types::ItemId;
use std::path::Path;

/// Reads `(item_id, display_name)` pairs from a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<(ItemId, String)>, String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read catalog {}: {}", path.display(), e))?;
    parse_catalog(&data)
}

/// Parses catalog text. Exposed separately so tests and other loaders can
/// reuse the format without touching the filesystem.
pub fn parse_catalog(data: &str) -> Result<Vec<(ItemId, String)>, String> {
    let mut items = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (id, name) = line
            .split_once(',')
            .ok_or_else(|| format!("catalog line {}: expected 'id,name'", lineno + 1))?;
        let id: u64 = id
            .trim()
            .parse()
            .map_err(|_| format!("catalog line {}: bad item id '{}'", lineno + 1, id))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("catalog line {}: empty item name", lineno + 1));
        }
        items.push((ItemId(id), name.to_string()));
    }
    Ok(items)
}

/// Loads the catalog file and builds the vocabulary index from it.
/// Duplicate names with conflicting ids fail here, at startup.
pub fn load_vocab(path: impl AsRef<Path>) -> Result<VocabIndex, String> {
    VocabIndex::from_catalog(load_catalog(path)?)
}
