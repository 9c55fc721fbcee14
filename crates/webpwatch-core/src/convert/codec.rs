//! Image transcoding seam.
//!
//! [`Codec`] is the contract the conversion pass relies on; [`WebpCodec`]
//! fulfils it with the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageReader};

use crate::error::CodecError;

/// Extension (without the dot) of files produced by [`WebpCodec`].
pub const WEBP_EXTENSION: &str = "webp";

/// Converts one source file into one target file.
pub trait Codec {
    /// Extension given to target files, without the leading dot.
    fn target_extension(&self) -> &str;

    /// Decodes `source` and writes the encoded result to `target`.
    ///
    /// The parent directory of `target` must already exist.
    fn convert(&self, source: &Path, target: &Path) -> Result<(), CodecError>;
}

/// Lossless WebP encoder over any still-image format the `image` crate reads.
///
/// The input format is sniffed from the file content, falling back to the
/// extension, so a misnamed PNG still converts and a text file named
/// `.png` fails with [`CodecError::Decode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    fn decode(source: &Path) -> Result<DynamicImage, CodecError> {
        let reader = ImageReader::open(source)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| CodecError::Read {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;

        reader.decode().map_err(|e| CodecError::Decode {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl Codec for WebpCodec {
    fn target_extension(&self) -> &str {
        WEBP_EXTENSION
    }

    fn convert(&self, source: &Path, target: &Path) -> Result<(), CodecError> {
        let img = Self::decode(source)?;

        // The WebP encoder only accepts 8-bit RGB(A).
        let img = if img.color().has_alpha() {
            DynamicImage::ImageRgba8(img.to_rgba8())
        } else {
            DynamicImage::ImageRgb8(img.to_rgb8())
        };

        let write_err = |e: std::io::Error| CodecError::Write {
            path: target.to_path_buf(),
            message: e.to_string(),
        };

        let file = File::create(target).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        img.write_with_encoder(WebPEncoder::new_lossless(&mut writer))
            .map_err(|e| match e {
                image::ImageError::IoError(io) => write_err(io),
                other => CodecError::Encode {
                    path: target.to_path_buf(),
                    message: other.to_string(),
                },
            })?;
        writer.flush().map_err(write_err)?;

        Ok(())
    }
}
