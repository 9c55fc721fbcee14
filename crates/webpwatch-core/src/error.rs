//! Error types for `webpwatch-core`.
//!
//! Fallible tree-level operations return [`CoreResult<T>`], an alias for
//! `Result<T, CoreError>`. Per-file conversion failures use the separate
//! [`CodecError`] so a pass can record them without aborting.

use std::path::PathBuf;

/// Unified error type for tree-level operations.
///
/// These errors are fatal to the operation that raised them (setting up the
/// roots, mirroring, rendering the tree). Errors scoped to a single file are
/// reported as [`CodecError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A walked path is not located below the root it was walked from.
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// The filesystem notification watcher could not be started.
    #[error("watch error: {0}")]
    Watch(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Classifies an I/O error raised while accessing `path`.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `webpwatch-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failure converting one file.
///
/// Never escalates past the file it belongs to: the conversion pass records
/// it and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The source file could not be opened.
    #[error("cannot read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The source bytes are not a supported image.
    #[error("cannot decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The encoder rejected the decoded pixels.
    #[error("cannot encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The destination file could not be created or written.
    #[error("cannot write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl CodecError {
    /// The path the failure refers to (source for read/decode, target otherwise).
    pub fn path(&self) -> &std::path::Path {
        match self {
            CodecError::Read { path, .. }
            | CodecError::Decode { path, .. }
            | CodecError::Encode { path, .. }
            | CodecError::Write { path, .. } => path,
        }
    }
}
