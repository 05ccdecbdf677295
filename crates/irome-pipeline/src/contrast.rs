//! Contrast adjustment: scaling of deviation from mid-gray.

use crate::buffer::PixelBuffer;
use crate::params::{CONTRAST_NEUTRAL, differs_from_neutral};

/// Mid-gray pivot the deviation is scaled around.
const MID_GRAY: f32 = 128.0;

/// Scale each color channel's deviation from mid-gray (128) by
/// `percent / 100`.
///
/// 100 is neutral and returns a bit-identical buffer. 0 collapses the
/// image to uniform mid-gray; 200 doubles every deviation, saturating at
/// the ends of the sample range. Alpha is untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, CONTRAST_NEUTRAL) {
        return buffer.clone();
    }

    let factor = percent / 100.0;
    let scale = |s: f32| (s - MID_GRAY) * factor + MID_GRAY;
    buffer.map_color_pixels(move |[r, g, b]| [scale(r), scale(g), scale(b)])
}
