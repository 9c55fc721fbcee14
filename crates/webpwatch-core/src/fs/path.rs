//! Path arithmetic shared by mirroring, conversion and tree rendering.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Returns `path` relative to `root`.
///
/// # Errors
///
/// Returns [`CoreError::OutsideRoot`] if `path` does not start with `root`.
pub fn relative_to(path: &Path, root: &Path) -> CoreResult<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| CoreError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
}

/// Returns the display label for a file's extension, including the dot.
///
/// Names without an extension (and dot-files such as `.bashrc`) yield an
/// empty string. Only the last extension counts: `a.tar.gz` yields `".gz"`.
pub fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Maps `source` under `input_root` to its counterpart under `output_root`
/// with the extension replaced by `extension` (given without the dot).
///
/// # Errors
///
/// Returns [`CoreError::OutsideRoot`] if `source` is not below `input_root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use webpwatch_core::fs::path::target_path;
///
/// let target = target_path(
///     Path::new("Input/a/b/dog.jpg"),
///     Path::new("Input"),
///     Path::new("Output"),
///     "webp",
/// )
/// .unwrap();
/// assert_eq!(target, Path::new("Output/a/b/dog.webp"));
/// ```
pub fn target_path(
    source: &Path,
    input_root: &Path,
    output_root: &Path,
    extension: &str,
) -> CoreResult<PathBuf> {
    let relative = relative_to(source, input_root)?;
    Ok(output_root.join(relative).with_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_strips_root() {
        let rel = relative_to(Path::new("/in/a/b/c.png"), Path::new("/in")).unwrap();
        assert_eq!(rel, Path::new("a/b/c.png"));
    }

    #[test]
    fn relative_to_root_itself_is_empty() {
        let rel = relative_to(Path::new("/in"), Path::new("/in")).unwrap();
        assert_eq!(rel, Path::new(""));
    }

    #[test]
    fn relative_to_outside_root_errors() {
        let err = relative_to(Path::new("/other/c.png"), Path::new("/in")).unwrap_err();
        assert!(matches!(err, CoreError::OutsideRoot { .. }));
    }

    #[test]
    fn extension_label_variants() {
        assert_eq!(extension_label(Path::new("cat.png")), ".png");
        assert_eq!(extension_label(Path::new("photo.JPG")), ".JPG");
        assert_eq!(extension_label(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_label(Path::new("Makefile")), "");
        assert_eq!(extension_label(Path::new(".bashrc")), "");
    }

    #[test]
    fn target_path_replaces_extension() {
        let target = target_path(
            Path::new("/in/a/cat.png"),
            Path::new("/in"),
            Path::new("/out"),
            "webp",
        )
        .unwrap();
        assert_eq!(target, Path::new("/out/a/cat.webp"));
    }

    #[test]
    fn target_path_adds_extension_when_missing() {
        let target = target_path(
            Path::new("/in/README"),
            Path::new("/in"),
            Path::new("/out"),
            "webp",
        )
        .unwrap();
        assert_eq!(target, Path::new("/out/README.webp"));
    }

    #[test]
    fn target_path_keeps_inner_dots() {
        let target = target_path(
            Path::new("/in/holiday.2024.jpeg"),
            Path::new("/in"),
            Path::new("/out"),
            "webp",
        )
        .unwrap();
        assert_eq!(target, Path::new("/out/holiday.2024.webp"));
    }
}
