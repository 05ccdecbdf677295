//! Saturation adjustment: scaling of chroma relative to per-pixel luma.

use crate::buffer::PixelBuffer;
use crate::grayscale::luma;
use crate::params::{SATURATION_NEUTRAL, differs_from_neutral};

/// Scale each channel's distance from the pixel's Rec.601 luma by
/// `percent / 100`.
///
/// 100 is neutral and returns a bit-identical buffer. 0 fully
/// desaturates (equivalent to full grayscale); 200 doubles the chroma,
/// saturating at the sample range. Gray pixels are fixed points at any
/// strength, since their channels already sit on the luma. Alpha is
/// untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, SATURATION_NEUTRAL) {
        return buffer.clone();
    }

    let factor = percent / 100.0;
    buffer.map_color_pixels(move |[r, g, b]| {
        let y = luma(r, g, b);
        [
            y + (r - y) * factor,
            y + (g - y) * factor,
            y + (b - y) * factor,
        ]
    })
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
        let buf = solid([220, 40, 90]);
        assert_eq!(adjust(&buf, 100.0), buf);
    }

    #[test]
    fn zero_saturation_equals_full_grayscale() {
        let buf = solid([220, 40, 90]);
        let desaturated = adjust(&buf, 0.0);
        let gray = crate::grayscale::adjust(&buf, 100.0);
        assert_eq!(desaturated, gray);
    }

    #[test]
    fn gray_pixels_are_fixed_points() {
        let buf = solid([128, 128, 128]);
        assert_eq!(adjust(&buf, 200.0).data(), buf.data());
        assert_eq!(adjust(&buf, 0.0).data(), buf.data());
    }

    #[test]
    fn boost_widens_channel_spread() {
        let buf = solid([180, 100, 60]);
        let boosted = adjust(&buf, 150.0);
        let spread_before = i16::from(buf.data()[0]) - i16::from(buf.data()[2]);
        let spread_after = i16::from(boosted.data()[0]) - i16::from(boosted.data()[2]);
        assert!(
            spread_after > spread_before,
            "expected wider spread, got {spread_before} -> {spread_after}"
        );
    }

    #[test]
    fn reduce_narrows_channel_spread() {
        let buf = solid([180, 100, 60]);
        let muted = adjust(&buf, 50.0);
        let spread_before = i16::from(buf.data()[0]) - i16::from(buf.data()[2]);
        let spread_after = i16::from(muted.data()[0]) - i16::from(muted.data()[2]);
        assert!(
            spread_after < spread_before,
            "expected narrower spread, got {spread_before} -> {spread_after}"
        );
    }

    #[test]
    fn output_stays_in_range_at_extremes() {
        let buf = solid([255, 0, 128]);
        let boosted = adjust(&buf, 200.0);
        // All samples are u8 by construction; just confirm the transform ran.
        assert_ne!(boosted.data(), buf.data());
    }
}
