//! Brightness adjustment: multiplicative scaling of every color channel.

use crate::buffer::PixelBuffer;
use crate::params::{BRIGHTNESS_NEUTRAL, differs_from_neutral};

/// Scale every color channel by `percent / 100`.
///
/// 100 is neutral and returns a bit-identical buffer. Values below 100
/// darken toward black; values above 100 brighten, saturating at 255.
/// Alpha is untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, BRIGHTNESS_NEUTRAL) {
        return buffer.clone();
    }

    let factor = percent / 100.0;
    buffer.map_color_pixels(|[r, g, b]| [r * factor, g * factor, b * factor])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::buffer::ChannelLayout;

    fn solid(pixel: [u8; 3]) -> PixelBuffer {
        let data: Vec<u8> = std::iter::repeat(pixel).take(4).flatten().collect();
        PixelBuffer::from_raw(2, 2, ChannelLayout::Rgb, data).unwrap()
    }

    #[test]
    fn neutral_is_bit_identical() {
        let buf = solid([13, 77, 250]);
        assert_eq!(adjust(&buf, 100.0), buf);
    }

    #[test]
    fn half_brightness_halves_samples() {
        let buf = solid([100, 200, 40]);
        let dimmed = adjust(&buf, 50.0);
        assert_eq!(&dimmed.data()[..3], &[50, 100, 20]);
    }

    #[test]
    fn double_brightness_saturates_at_255() {
        let buf = solid([100, 200, 40]);
        let brightened = adjust(&buf, 200.0);
        assert_eq!(&brightened.data()[..3], &[200, 255, 80]);
    }

    #[test]
    fn zero_brightness_is_black() {
        let buf = solid([100, 200, 40]);
        let black = adjust(&buf, 0.0);
        assert!(black.data().iter().all(|&s| s == 0));
    }
}
