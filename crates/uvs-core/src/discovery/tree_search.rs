//! Depth-limited search for a named file under a directory tree.

use crate::cancel::CancellationToken;
use crate::error::{Result, SelectorError};
use crate::platform::separator_count;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// How the depth of a tree entry is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthMode {
    /// Separator count of the entry's full path string. The cutoff therefore
    /// depends on how deep the search root itself sits.
    #[default]
    Absolute,
    /// Distance from the search root, which is depth 0.
    Relative,
}

/// Maximum depth an entry may sit at before its subtree is pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimit {
    pub max_depth: usize,
    pub mode: DepthMode,
}

impl DepthLimit {
    pub fn absolute(max_depth: usize) -> Self {
        Self {
            max_depth,
            mode: DepthMode::Absolute,
        }
    }

    pub fn relative(max_depth: usize) -> Self {
        Self {
            max_depth,
            mode: DepthMode::Relative,
        }
    }

    fn admits(&self, entry: &DirEntry) -> bool {
        match self.mode {
            DepthMode::Absolute => separator_count(entry.path()) <= self.max_depth,
            DepthMode::Relative => entry.depth() <= self.max_depth,
        }
    }
}

/// Outcome of visiting a single entry.
#[derive(Debug, PartialEq, Eq)]
enum Visit {
    Continue,
    Found(PathBuf),
}

fn visit(entry: &DirEntry, target_name: &str) -> Visit {
    if !entry.file_type().is_dir() && entry.file_name() == target_name {
        Visit::Found(entry.path().to_path_buf())
    } else {
        Visit::Continue
    }
}

/// Find the first file named `target_name` under `root`.
///
/// Entries are visited in pre-order, siblings sorted by file name, and the
/// walk stops at the first match. Symlinks are not followed. Entries beyond
/// `limit` are pruned together with their subtrees. Any error reading the
/// tree aborts the search.
pub fn find(
    root: &Path,
    target_name: &str,
    limit: DepthLimit,
    token: &CancellationToken,
) -> Result<Option<PathBuf>> {
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker.into_iter().filter_entry(|e| limit.admits(e)) {
        token.check()?;

        let entry = entry.map_err(|source| SelectorError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;

        if let Visit::Found(path) = visit(&entry, target_name) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}
