//! Indented directory tree rendering.
//!
//! ```text
//! ├── a/
//! │   ├── b/
//! │   │   └── dog.jpg (.jpg)
//! │   └── cat.png (.png)
//! └── notes ()
//! ```

use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::path::extension_label;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Line emitted in place of a directory listing that was refused.
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Line emitted in place of a nested listing that failed for another reason,
/// typically a directory removed while the tree was being rendered.
pub const UNREADABLE: &str = "[Unreadable]";

/// Renders the tree below `root` into display lines.
///
/// Siblings are sorted by name; directories are not grouped first. The
/// corner connector marks the last entry of each directory. A directory
/// whose listing is refused contributes a single
/// [`PERMISSION_DENIED`] line and its siblings are still rendered. Any other
/// failure below the root contributes an [`UNREADABLE`] line instead.
///
/// # Errors
///
/// - [`CoreError::NotADirectory`] if `root` is not a directory.
/// - [`CoreError::NotFound`] / [`CoreError::Io`] if `root` itself cannot be
///   listed for a reason other than permission denial.
pub fn render_tree(root: &Path) -> CoreResult<Vec<String>> {
    if root.exists() && !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }
    let mut lines = Vec::new();
    match list_sorted(root) {
        Ok(children) => push_children(children, "", &mut lines),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(dir = %root.display(), "listing refused");
            lines.push(format!("{BRANCH}{PERMISSION_DENIED}"));
        }
        Err(e) => return Err(CoreError::from_io(root, e)),
    }
    Ok(lines)
}

/// Renders the tree below `root` and writes it to `out`, one line per entry.
pub fn print_tree(root: &Path, out: &mut dyn Write) -> CoreResult<()> {
    for line in render_tree(root)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn list_sorted(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut children: Vec<_> = fs::read_dir(dir)?
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "skipping unreadable entry: {e}");
                None
            }
        })
        .collect();
    children.sort_by_key(|c| c.file_name());
    Ok(children)
}

fn push_children(children: Vec<DirEntry>, indent: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { CORNER } else { BRANCH };
        let name = crate::nfc_string(&child.file_name().to_string_lossy());
        let is_dir = child.file_type().map(|ft| ft.is_dir()).unwrap_or(false);

        if is_dir {
            lines.push(format!("{indent}{connector}{name}/"));
            let nested = if is_last { BLANK_INDENT } else { PIPE_INDENT };
            push_nested(&child.path(), &format!("{indent}{nested}"), lines);
        } else {
            let ext = extension_label(&child.path());
            lines.push(format!("{indent}{connector}{name} ({ext})"));
        }
    }
}

/// Lists a subdirectory; a failure becomes a sentinel line, never an error.
fn push_nested(dir: &Path, indent: &str, lines: &mut Vec<String>) {
    match list_sorted(dir) {
        Ok(children) => push_children(children, indent, lines),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(dir = %dir.display(), "listing refused");
            lines.push(format!("{indent}{BRANCH}{PERMISSION_DENIED}"));
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "cannot list directory: {e}");
            lines.push(format!("{indent}{BRANCH}{UNREADABLE}"));
        }
    }
}
