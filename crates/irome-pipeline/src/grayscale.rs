//! Grayscale adjustment: blend toward luma-derived gray.
//!
//! Owns the Rec.601 luma weights used by both this stage and the
//! saturation stage, so the two agree on what "gray" means.

use crate::buffer::PixelBuffer;
use crate::params::{GRAYSCALE_NEUTRAL, differs_from_neutral};

/// Rec.601 luma of a pixel, on the 0–255 scale.
///
/// `0.299*R + 0.587*G + 0.114*B` -- the standard weighted conversion, not
/// a plain channel average.
#[must_use]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Blend each pixel toward its luma gray by `percent / 100`.
///
/// 0 is neutral and returns a bit-identical buffer; 100 replaces every
/// pixel with `(y, y, y)` where `y` is its Rec.601 luma. An already-gray
/// pixel has luma equal to its gray level, so grayscale conversion of a
/// gray image is a no-op. Alpha is untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, GRAYSCALE_NEUTRAL) {
        return buffer.clone();
    }

    let t = percent / 100.0;
    buffer.map_color_pixels(move |[r, g, b]| {
        let y = luma(r, g, b);
        [r + (y - r) * t, g + (y - g) * t, b + (y - b) * t]
    })
}
