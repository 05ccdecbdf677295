//! Invert adjustment: blend toward the photographic negative.

use crate::buffer::PixelBuffer;
use crate::params::{INVERT_NEUTRAL, differs_from_neutral};

/// Blend each color channel toward `255 - sample` by `percent / 100`.
///
/// 0 is neutral and returns a bit-identical buffer; 100 is a full
/// negative. At 50 every channel lands on 127.5 and rounds to 128
/// regardless of input. Alpha is untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, INVERT_NEUTRAL) {
        return buffer.clone();
    }

    let t = percent / 100.0;
    let blend = move |s: f32| s + ((255.0 - s) - s) * t;
    buffer.map_color_pixels(move |[r, g, b]| [blend(r), blend(g), blend(b)])
}
