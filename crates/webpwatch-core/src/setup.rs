//! Working-directory setup performed before any conversion or watching.

use std::io::Write;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Whether a root had to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    Created,
    Existing,
}

/// Ensures `dir` exists as a directory, creating it (and its parents) if needed.
///
/// # Errors
///
/// - [`CoreError::NotADirectory`] if `dir` exists but is a file.
/// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] if it cannot be created.
pub fn ensure_dir(dir: &Path) -> CoreResult<RootStatus> {
    if dir.is_dir() {
        return Ok(RootStatus::Existing);
    }
    if dir.exists() {
        return Err(CoreError::NotADirectory(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir).map_err(|e| CoreError::from_io(dir, e))?;
    Ok(RootStatus::Created)
}

/// Ensures both roots exist and reports each one to `out`.
pub fn ensure_roots(input_root: &Path, output_root: &Path, out: &mut dyn Write) -> CoreResult<()> {
    for dir in [input_root, output_root] {
        match ensure_dir(dir)? {
            RootStatus::Created => writeln!(out, "Created folder: {}", dir.display())?,
            RootStatus::Existing => writeln!(out, "Folder already exists: {}", dir.display())?,
        }
    }
    Ok(())
}
