//! Image conversion: the codec seam, the per-pass engine and its spinner.

pub mod codec;
pub mod engine;
pub mod spinner;

pub use codec::{Codec, WebpCodec, WEBP_EXTENSION};
pub use engine::{
    ConversionEngine, ConversionTask, EngineOptions, FileOutcome, FileReport, PassReport,
};
pub use spinner::{CancelToken, Spinner};
