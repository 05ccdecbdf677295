//! Error taxonomy for the adjustment pipeline.
//!
//! All errors are terminal for the single request that triggered them; no
//! partial images are ever produced. [`PipelineError::is_client_error`]
//! separates rejected input (4xx-class at an HTTP boundary) from internal
//! failure (5xx-class).

use crate::buffer::ChannelLayout;
use crate::codec::OutputFormat;

/// Errors that can occur while decoding, adjusting, or encoding an image.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The input bytes were truncated, corrupt, or in an unsupported format.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// A numeric adjustment parameter was outside its declared range.
    ///
    /// Raised before any pipeline stage runs -- validation is
    /// all-or-nothing, so an invalid snapshot performs no work.
    #[error("parameter {field} = {value} is out of range ({min} to {max})")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Smallest accepted value.
        min: f32,
        /// Largest accepted value.
        max: f32,
    },

    /// A named-filter identifier not present in the catalog.
    #[error("unknown filter {0:?}")]
    UnknownFilter(String),

    /// The encoder failed on a valid buffer. Internal: should not occur.
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    /// The target format cannot represent the buffer's channel layout.
    #[error("{format} cannot encode {layout:?} pixel data")]
    UnsupportedEncoding {
        /// Requested output format.
        format: OutputFormat,
        /// Layout of the buffer that was to be encoded.
        layout: ChannelLayout,
    },

    /// Raw sample data did not match the claimed dimensions and layout.
    #[error("dimensions {width}x{height} do not match {len} bytes of {layout:?} samples")]
    InvalidDimensions {
        /// Claimed width in pixels.
        width: u32,
        /// Claimed height in pixels.
        height: u32,
        /// Claimed channel layout.
        layout: ChannelLayout,
        /// Actual sample count supplied.
        len: usize,
    },
}

impl PipelineError {
    /// Whether the caller's input caused the failure.
    ///
    /// `true` maps to a 4xx-class rejection at a request boundary;
    /// `false` means the pipeline itself failed (5xx-class).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::Decode(_)
                | Self::InvalidParameter { .. }
                | Self::UnknownFilter(_)
        )
    }
}
