//! File-path snapshots of a directory tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::fs::walk::TreeWalk;

/// The set of file paths present under a root at one instant.
///
/// Only non-directory entries are recorded. Equality is set equality, so
/// walk order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSnapshot {
    files: BTreeSet<PathBuf>,
}

impl FileSnapshot {
    /// Walks `root` and records every file below it.
    pub fn capture(root: &Path) -> Self {
        Self {
            files: TreeWalk::new(root).files().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Paths added and removed since `previous`.
    pub fn diff(&self, previous: &FileSnapshot) -> SnapshotDiff {
        SnapshotDiff {
            added: self.files.difference(&previous.files).cloned().collect(),
            removed: previous.files.difference(&self.files).cloned().collect(),
        }
    }
}

impl FromIterator<PathBuf> for FileSnapshot {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Difference between two snapshots. A rename shows up in both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub added: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn capture_records_files_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b")).unwrap();
        fs::write(tmp.path().join("a").join("cat.png"), "").unwrap();
        fs::write(tmp.path().join("top.png"), "").unwrap();

        let snap = FileSnapshot::capture(tmp.path());

        assert_eq!(snap.len(), 2);
        assert!(snap.contains(&tmp.path().join("a").join("cat.png")));
        assert!(snap.contains(&tmp.path().join("top.png")));
        assert!(!snap.contains(&tmp.path().join("a")));
    }

    #[test]
    fn empty_root_gives_empty_snapshot() {
        let tmp = TempDir::new().unwrap();
        assert!(FileSnapshot::capture(tmp.path()).is_empty());
    }

    #[test]
    fn identical_trees_have_empty_diff() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("x.png"), "").unwrap();

        let first = FileSnapshot::capture(tmp.path());
        let second = FileSnapshot::capture(tmp.path());

        assert_eq!(first, second);
        assert!(second.diff(&first).is_empty());
    }

    #[test]
    fn content_change_is_not_a_difference() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("x.png");
        fs::write(&file, "one").unwrap();
        let first = FileSnapshot::capture(tmp.path());
        fs::write(&file, "two").unwrap();

        assert!(FileSnapshot::capture(tmp.path()).diff(&first).is_empty());
    }

    #[test]
    fn addition_and_removal_detected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("old.png"), "").unwrap();
        let first = FileSnapshot::capture(tmp.path());

        fs::remove_file(tmp.path().join("old.png")).unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("new.png"), "").unwrap();
        let diff = FileSnapshot::capture(tmp.path()).diff(&first);

        assert_eq!(diff.added, vec![tmp.path().join("sub").join("new.png")]);
        assert_eq!(diff.removed, vec![tmp.path().join("old.png")]);
    }

    #[test]
    fn rename_is_removal_plus_addition() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.png"), "").unwrap();
        let first = FileSnapshot::capture(tmp.path());

        fs::rename(tmp.path().join("a.png"), tmp.path().join("b.png")).unwrap();
        let second = FileSnapshot::capture(tmp.path());
        let diff = second.diff(&first);

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
        assert_eq!(diff.added, vec![tmp.path().join("b.png")]);
        assert_eq!(diff.removed, vec![tmp.path().join("a.png")]);
    }

    #[test]
    fn empty_directory_creation_is_not_a_difference() {
        let tmp = TempDir::new().unwrap();
        let first = FileSnapshot::capture(tmp.path());
        fs::create_dir(tmp.path().join("empty")).unwrap();
        assert!(FileSnapshot::capture(tmp.path()).diff(&first).is_empty());
    }

    #[test]
    fn from_iterator_ignores_order() {
        let a: FileSnapshot = vec![PathBuf::from("b"), PathBuf::from("a")]
            .into_iter()
            .collect();
        let b: FileSnapshot = vec![PathBuf::from("a"), PathBuf::from("b")]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![Path::new("a"), Path::new("b")]);
    }
}
