//! irome-pipeline: Pure image adjustment pipeline (sans-IO).
//!
//! Decodes raster images into a [`PixelBuffer`], applies a deterministic,
//! fixed-order chain of adjustments (grayscale -> sepia -> invert -> hue ->
//! saturation -> contrast -> brightness -> blur), and encodes the result
//! back to bytes.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory byte
//! slices and returns structured data. Session coordination for real-time
//! editing lives in `irome-session`; transports and file handling live with
//! the caller.

pub mod blur;
pub mod brightness;
pub mod buffer;
pub mod catalog;
pub mod codec;
pub mod contrast;
pub mod error;
pub mod grayscale;
pub mod hue;
pub mod invert;
pub mod params;
pub mod pipeline;
pub mod saturate;
pub mod sepia;

pub use buffer::{ChannelLayout, Dimensions, PixelBuffer};
pub use codec::{EncodedImage, OutputFormat};
pub use error::PipelineError;
pub use params::AdjustmentParams;

/// Apply a named preset filter to encoded image bytes.
///
/// This is the one-shot "upload" boundary: decode, resolve the preset,
/// render, re-encode. The output format follows the decoded layout -- PNG
/// when the source carries alpha, JPEG otherwise -- and
/// [`EncodedImage::format`] names the content type for the response.
///
/// # Errors
///
/// Returns [`PipelineError::UnknownFilter`] for a name outside the
/// catalog, [`PipelineError::EmptyInput`] / [`PipelineError::Decode`] for
/// unusable input bytes, and [`PipelineError::Encode`] if re-encoding
/// fails (internal).
pub fn apply_named_filter(
    image_bytes: &[u8],
    filter: &str,
) -> Result<EncodedImage, PipelineError> {
    let params = catalog::resolve(filter)?;
    apply_adjustments(image_bytes, &params)
}

/// Apply one exact parameter snapshot to encoded image bytes.
///
/// This is the real-time edit boundary: stateless with respect to the
/// pipeline, a pure function of `(image_bytes, params)`. Session and
/// debounce state live with the caller.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidParameter`] before any pixel work when
/// a field is out of range, [`PipelineError::EmptyInput`] /
/// [`PipelineError::Decode`] for unusable input bytes, and
/// [`PipelineError::Encode`] if re-encoding fails (internal).
pub fn apply_adjustments(
    image_bytes: &[u8],
    params: &AdjustmentParams,
) -> Result<EncodedImage, PipelineError> {
    let buffer = codec::decode(image_bytes)?;
    let rendered = pipeline::render(&buffer, params)?;
    let format = OutputFormat::for_layout(rendered.layout());
    let bytes = codec::encode(&rendered, format)?;
    Ok(EncodedImage { bytes, format })
}
