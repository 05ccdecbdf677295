//! Decoded raster representation all adjustments operate on.
//!
//! A [`PixelBuffer`] is a dense, row-major array of 8-bit channel samples
//! plus its dimensions and channel layout. Pipeline stages never mutate a
//! buffer in place: each stage consumes a reference and produces a fresh
//! buffer, so a superseded computation can be dropped without leaving
//! partially-written pixels behind.

use rayon::prelude::*;

use crate::error::PipelineError;

/// Channel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Three channels per pixel: red, green, blue.
    Rgb,
    /// Four channels per pixel: red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of samples per pixel.
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An in-memory decoded raster image.
///
/// Invariant: `data.len() == width * height * layout.channels()`, with
/// `width` and `height` both positive. [`PixelBuffer::from_raw`] enforces
/// this; every transform preserves it by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw row-major channel samples.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidDimensions`] if either dimension is
    /// zero or `data` does not hold exactly
    /// `width * height * layout.channels()` samples.
    pub fn from_raw(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> Result<Self, PipelineError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(layout.channels()));
        if width == 0 || height == 0 || expected != Some(data.len()) {
            return Err(PipelineError::InvalidDimensions {
                width,
                height,
                layout,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Construct without checking the length invariant.
    ///
    /// For internal use by transforms that build `data` from an existing
    /// buffer's dimensions, where the invariant holds by construction.
    pub(crate) fn new_unchecked(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * layout.channels(),
        );
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    #[must_use]
    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Dimensions in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw row-major channel samples.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw samples.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Sample for channel `c` of the pixel at `(x, y)`.
    ///
    /// Callers must stay within the buffer bounds; coordinates are not
    /// wrapped or clamped here.
    #[must_use]
    pub(crate) fn sample(&self, x: u32, y: u32, c: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height && c < self.layout.channels());
        let idx = (y as usize * self.width as usize + x as usize) * self.layout.channels() + c;
        self.data[idx]
    }

    /// Map every pixel's color channels through `f`, producing a new buffer.
    ///
    /// `f` receives `[r, g, b]` as `f32` samples on the 0–255 scale and
    /// returns the transformed triple; results are rounded and clamped to
    /// `[0, 255]` on write-back (never wrapped). Alpha, when present, is
    /// copied through untouched.
    ///
    /// Rows are partitioned across rayon workers. Each worker writes a
    /// disjoint output region and reads only the matching input row, so the
    /// result is bit-identical to sequential execution.
    #[must_use = "returns the transformed buffer"]
    pub(crate) fn map_color_pixels<F>(&self, f: F) -> Self
    where
        F: Fn([f32; 3]) -> [f32; 3] + Sync,
    {
        let channels = self.layout.channels();
        let row_len = self.width as usize * channels;
        let mut out = vec![0_u8; self.data.len()];

        out.par_chunks_exact_mut(row_len)
            .zip(self.data.par_chunks_exact(row_len))
            .for_each(|(dst_row, src_row)| {
                for (dst, src) in dst_row
                    .chunks_exact_mut(channels)
                    .zip(src_row.chunks_exact(channels))
                {
                    let [r, g, b] =
                        f([f32::from(src[0]), f32::from(src[1]), f32::from(src[2])]);
                    dst[0] = clamp_sample(r);
                    dst[1] = clamp_sample(g);
                    dst[2] = clamp_sample(b);
                    if channels == 4 {
                        dst[3] = src[3];
                    }
                }
            });

        Self::new_unchecked(self.width, self.height, self.layout, out)
    }
}

/// Round and clamp an intermediate `f32` sample back to 8 bits.
///
/// Clamping, not wraparound: out-of-range intermediates saturate at the
/// ends of the representable range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_sample(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
