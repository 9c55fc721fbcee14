//! webpwatch core library — UI-agnostic mirroring, conversion and watching.
//!
//! `webpwatch-core` holds everything the `webpwatch` binary does apart from
//! argument parsing, logging setup and terminal interaction. Output meant for
//! the operator is written to a caller-supplied [`std::io::Write`].
//!
//! # Modules
//!
//! - [`fs`] — Path arithmetic, the shared tree walk, tree rendering, and output structure mirroring.
//! - [`convert`] — The [`Codec`] seam, the WebP codec, the per-pass [`ConversionEngine`] and its spinner.
//! - [`watch`] — File-path snapshots, tickers, and the [`ChangeWatcher`] loop.
//! - [`config`] — Run settings ([`RunConfig`]).
//! - [`setup`] — Creation of the input and output roots.
//! - [`error`] — Tree-level [`CoreError`] and per-file [`CodecError`].

pub mod config;
pub mod convert;
pub mod error;
pub mod fs;
pub mod setup;
pub mod watch;

pub use config::settings::{RunConfig, RunMode, TriggerKind};
pub use convert::{Codec, ConversionEngine, EngineOptions, PassReport, WebpCodec};
pub use error::{CodecError, CoreError, CoreResult};
pub use fs::{mirror_structure, print_tree, render_tree, TreeWalk};
pub use setup::ensure_roots;
pub use watch::{ChangeWatcher, Confirm, EventTicker, FileSnapshot, PollTicker, Ticker};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which makes accented and
/// Hangul names print as separate combining characters. This re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_string_composes_decomposed_input() {
        let decomposed = "e\u{0301}cole.png";
        assert_eq!(nfc_string(decomposed), "\u{00e9}cole.png");
    }

    #[test]
    fn nfc_string_leaves_ascii_alone() {
        assert_eq!(nfc_string("cat.png"), "cat.png");
    }
}
