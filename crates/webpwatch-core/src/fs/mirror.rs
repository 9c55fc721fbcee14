//! Replicates the input tree's directory structure under the output root.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::path::relative_to;
use crate::fs::walk::TreeWalk;

/// Counts from one mirroring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Directories that did not exist and were created.
    pub created: usize,
    /// Directories that were already present and left untouched.
    pub existing: usize,
}

/// Ensures every directory below `input_root` exists below `output_root`.
///
/// Idempotent: calling it again creates nothing new. Only directories are
/// created; files are never touched, and output directories whose input
/// counterpart disappeared are left in place.
///
/// # Errors
///
/// Returns [`CoreError::PermissionDenied`] or [`CoreError::Io`] if an output
/// directory cannot be created.
pub fn mirror_structure(input_root: &Path, output_root: &Path) -> CoreResult<MirrorReport> {
    let mut report = MirrorReport::default();

    for dir in TreeWalk::new(input_root).dirs() {
        let target = output_root.join(relative_to(&dir, input_root)?);
        if target.is_dir() {
            report.existing += 1;
            continue;
        }
        std::fs::create_dir_all(&target).map_err(|e| CoreError::from_io(&target, e))?;
        tracing::debug!(dir = %target.display(), "created output directory");
        report.created += 1;
    }

    Ok(report)
}
