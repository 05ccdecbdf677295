//! Codec boundary: bytes in, [`PixelBuffer`] out, and back again.
//!
//! Decoding accepts whatever the `image` crate can parse (PNG, JPEG, BMP,
//! WebP). Sources carrying an alpha channel decode to [`ChannelLayout::Rgba`],
//! everything else to [`ChannelLayout::Rgb`]. Encoding is deterministic for
//! identical input, so re-encoding introduces no cumulative artifacts beyond
//! the codec's inherent lossy compression.

use std::fmt;

use image::ImageEncoder;

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::error::PipelineError;

/// JPEG quality used by [`encode`]. Fixed so identical buffers always
/// produce identical bytes.
const JPEG_QUALITY: u8 = 90;

/// Raster format a rendered buffer is encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, supports alpha.
    Png,
    /// Lossy, RGB only.
    Jpeg,
}

impl OutputFormat {
    /// MIME content type for a request/response boundary.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// The format that can represent `layout` without losing channels:
    /// PNG when alpha is present, JPEG otherwise.
    #[must_use]
    pub const fn for_layout(layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Rgb => Self::Jpeg,
            ChannelLayout::Rgba => Self::Png,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        })
    }
}

/// An encoded raster image plus the format it was encoded to, ready to
/// cross a request/response boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// The encoded bytes.
    pub bytes: Vec<u8>,
    /// The format of `bytes`; `format.content_type()` names the MIME type.
    pub format: OutputFormat,
}

/// Decode raw image bytes into a [`PixelBuffer`].
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty and
/// [`PipelineError::Decode`] if the data is truncated, corrupt, or in an
/// unsupported format.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes).map_err(PipelineError::Decode)?;
    if img.color().has_alpha() {
        let rgba = img.into_rgba8();
        PixelBuffer::from_raw(
            rgba.width(),
            rgba.height(),
            ChannelLayout::Rgba,
            rgba.into_raw(),
        )
    } else {
        let rgb = img.into_rgb8();
        PixelBuffer::from_raw(
            rgb.width(),
            rgb.height(),
            ChannelLayout::Rgb,
            rgb.into_raw(),
        )
    }
}

/// Encode a [`PixelBuffer`] to `format`.
///
/// # Errors
///
/// Returns [`PipelineError::UnsupportedEncoding`] when `format` cannot
/// represent the buffer's channel layout (JPEG cannot carry alpha) and
/// [`PipelineError::Encode`] if the encoder itself fails.
pub fn encode(buffer: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, PipelineError> {
    let layout = buffer.layout();
    if format == OutputFormat::Jpeg && layout.has_alpha() {
        return Err(PipelineError::UnsupportedEncoding { format, layout });
    }

    let color = match layout {
        ChannelLayout::Rgb => image::ExtendedColorType::Rgb8,
        ChannelLayout::Rgba => image::ExtendedColorType::Rgba8,
    };

    let mut out = Vec::new();
    match format {
        OutputFormat::Png => image::codecs::png::PngEncoder::new(&mut out)
            .write_image(buffer.data(), buffer.width(), buffer.height(), color)
            .map_err(PipelineError::Encode)?,
        OutputFormat::Jpeg => {
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
                .write_image(buffer.data(), buffer.width(), buffer.height(), color)
                .map_err(PipelineError::Encode)?;
        }
    }
    Ok(out)
}
