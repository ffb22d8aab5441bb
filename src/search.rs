//! Bounded-depth project search
//!
//! Walks the code root looking for a directory whose name matches the
//! term, at most `max_depth` levels down. Deeper matches win over
//! shallower ones; hidden entries are pruned entirely.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// How far below the code root the search descends.
pub const MAX_DEPTH: usize = 3;

/// Outcome of a directory search. `depth` is 0 when nothing matched; any
/// match sits at depth >= 1 (immediate children of the root).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Option<PathBuf>,
    pub depth: usize,
}

/// Whether the search name demands an exact-case match. All-lowercase
/// names search case-insensitively.
pub fn needs_case_sensitive(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
}

/// Search `root` for a directory named `name`.
///
/// Every subdirectory is visited regardless of whether its parent
/// matched; among multiple matches the deepest wins, and the first one
/// encountered wins among equal depths.
pub fn search(root: &Path, name: &str, case_sensitive: bool, max_depth: usize) -> SearchResult {
    let mut best = SearchResult::default();

    // The predicate also sees the root itself (depth 0); only children
    // are subject to the hidden-name rule, whatever the root is called.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            // Unreadable directories are skipped, not fatal.
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let matched = entry
            .file_name()
            .to_str()
            .map(|n| {
                if case_sensitive {
                    n == name
                } else {
                    n.eq_ignore_ascii_case(name)
                }
            })
            .unwrap_or(false);

        if matched && entry.depth() > best.depth {
            best = SearchResult {
                path: Some(entry.path().to_path_buf()),
                depth: entry.depth(),
            };
        }
    }

    best
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
