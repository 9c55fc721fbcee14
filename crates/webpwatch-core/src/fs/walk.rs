//! Recursive directory walking shared by mirroring, conversion and snapshots.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Kind of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One entry found below a walk root. The root itself is never yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl WalkEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// A restartable walk over everything below `root`.
///
/// Each call to [`TreeWalk::entries`] starts a fresh, lazy traversal, so
/// the same `TreeWalk` can be consumed by several components. Entries are
/// yielded depth-first with siblings in file-name order. Symlinks are not
/// followed and show up as files.
///
/// Entries that cannot be read (for example a subdirectory without read
/// permission) are skipped with a warning; the rest of the tree is still
/// walked.
#[derive(Debug, Clone)]
pub struct TreeWalk {
    root: PathBuf,
}

impl TreeWalk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yields every directory and file below the root.
    pub fn entries(&self) -> impl Iterator<Item = WalkEntry> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|result| match result {
                Ok(entry) => {
                    let kind = if entry.file_type().is_dir() {
                        EntryKind::Dir
                    } else {
                        EntryKind::File
                    };
                    Some(WalkEntry {
                        path: entry.into_path(),
                        kind,
                    })
                }
                Err(e) => {
                    tracing::warn!(root = %self.root.display(), "skipping unreadable entry: {e}");
                    None
                }
            })
    }

    /// Lazily yields only directories below the root.
    pub fn dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries().filter(WalkEntry::is_dir).map(|e| e.path)
    }

    /// Lazily yields only non-directory entries below the root.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries().filter(WalkEntry::is_file).map(|e| e.path)
    }
}
