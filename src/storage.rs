use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, SnipnoteError};
use crate::models::SnippetEntry;

/// Load the snippet table from `path`.
///
/// An empty file is an empty table; a missing file is an error so that
/// callers can distinguish "no database yet" from "no snippets".
pub fn load_snippets(path: &Path) -> Result<Vec<SnippetEntry>> {
    if !path.exists() {
        return Err(SnipnoteError::DatabaseNotFound(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;

    // Handle empty database file
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    serde_json::from_str(&content).map_err(|e| e.into())
}

/// Save the snippet table to `path`.
pub fn save_snippets(path: &Path, snippets: &[SnippetEntry]) -> Result<()> {
    let serialized = serde_json::to_string_pretty(&snippets)?;
    fs::write(path, serialized)?;

    Ok(())
}

/// Append a new entry to the table.
pub fn add_snippet(path: &Path, pattern: String, replacement: String) -> Result<()> {
    let mut snippets = match load_snippets(path) {
        Ok(s) => s,
        Err(SnipnoteError::DatabaseNotFound(_)) => vec![],
        Err(e) => return Err(e),
    };

    snippets.push(SnippetEntry::new(pattern, replacement));
    save_snippets(path, &snippets)
}

/// Delete every entry with the given pattern.
pub fn delete_snippet(path: &Path, pattern: &str) -> Result<()> {
    let mut snippets = load_snippets(path)?;
    let before = snippets.len();
    snippets.retain(|entry| entry.pattern != pattern);

    if snippets.len() == before {
        warn!("No snippet with pattern '{}' to delete", pattern);
    }

    save_snippets(path, &snippets)
}

/// Update the replacement of every entry with the given pattern.
pub fn update_snippet(path: &Path, pattern: &str, new_replacement: String) -> Result<()> {
    let mut snippets = load_snippets(path)?;
    let mut updated = false;

    for entry in &mut snippets {
        if entry.pattern == pattern {
            entry.update_replacement(new_replacement.clone());
            updated = true;
        }
    }

    if !updated {
        return Err(SnipnoteError::SnippetNotFound(pattern.to_string()));
    }

    save_snippets(path, &snippets)
}

/// Backfill ids for entries saved before ids existed. Existing ids are
/// never touched.
pub fn assign_missing_ids(snippets: &mut [SnippetEntry]) {
    let mut taken: HashSet<String> = snippets.iter().filter_map(|e| e.id.clone()).collect();
    let mut next = 0usize;

    for entry in snippets.iter_mut() {
        if entry.id.is_some() {
            continue;
        }
        let mut candidate = format!("snippet-{}", next);
        while taken.contains(&candidate) {
            next += 1;
            candidate = format!("snippet-{}", next);
        }
        taken.insert(candidate.clone());
        entry.id = Some(candidate);
        next += 1;
    }
}
