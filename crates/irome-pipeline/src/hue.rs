//! Hue adjustment: rotation of the hue angle in HSL space.

use crate::buffer::PixelBuffer;
use crate::params::{HUE_NEUTRAL, differs_from_neutral};

/// Rotate every pixel's hue by `degrees` in HSL space.
///
/// 0 is neutral and returns a bit-identical buffer; ±180 meet at the
/// complementary hue. Saturation and lightness are preserved, so
/// achromatic pixels (grays) are fixed points at any angle. Alpha is
/// untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, degrees: f32) -> PixelBuffer {
    if !differs_from_neutral(degrees, HUE_NEUTRAL) {
        return buffer.clone();
    }

    buffer.map_color_pixels(move |[r, g, b]| {
        let (h, s, l) = rgb_to_hsl(r / 255.0, g / 255.0, b / 255.0);
        let rotated = (h + degrees).rem_euclid(360.0);
        let (r1, g1, b1) = hsl_to_rgb(rotated, s, l);
        [r1 * 255.0, g1 * 255.0, b1 * 255.0]
    })
}

/// Convert unit-scale RGB to (hue in degrees `[0, 360)`, saturation,
/// lightness). Achromatic pixels report hue 0 and saturation 0.
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let delta = max - min;
    if delta <= f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if (max - r).abs() <= f32::EPSILON {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() <= f32::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (h.rem_euclid(360.0), s, l)
}

/// Convert (hue in degrees `[0, 360)`, saturation, lightness) back to
/// unit-scale RGB.
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (r1 + m, g1 + m, b1 + m)
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
        let buf = solid([240, 20, 130]);
        assert_eq!(adjust(&buf, 0.0), buf);
    }

    #[test]
    fn rotating_red_by_120_gives_green() {
        let buf = solid([255, 0, 0]);
        let rotated = adjust(&buf, 120.0);
        assert_eq!(&rotated.data()[..3], &[0, 255, 0]);
    }

    #[test]
    fn rotating_red_by_240_gives_blue() {
        let buf = solid([255, 0, 0]);
        let rotated = adjust(&buf, 240.0 - 360.0);
        assert_eq!(&rotated.data()[..3], &[0, 0, 255]);
    }

    #[test]
    fn negative_rotation_wraps() {
        // -120 from red lands on blue, same as +240.
        let buf = solid([255, 0, 0]);
        assert_eq!(adjust(&buf, -120.0), adjust(&buf, -120.0 + 360.0));
    }

    #[test]
    fn grays_are_fixed_points() {
        for level in [0_u8, 1, 128, 254, 255] {
            let buf = solid([level, level, level]);
            let rotated = adjust(&buf, 90.0);
            assert_eq!(rotated.data(), buf.data(), "gray level {level} moved");
        }
    }

    #[test]
    fn full_turn_round_trip_is_close_to_identity() {
        // Two opposite rotations should restore the original within
        // one sample step of rounding error.
        let buf = solid([200, 120, 40]);
        let back = adjust(&adjust(&buf, 90.0), -90.0);
        for (a, b) in buf.data().iter().zip(back.data()) {
            let diff = (i16::from(*a) - i16::from(*b)).abs();
            assert!(diff <= 1, "expected near-identity, got {a} vs {b}");
        }
    }

    #[test]
    fn hsl_round_trip_preserves_primaries() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
        assert!(h.abs() < 1e-4);
        assert!((s - 1.0).abs() < 1e-4);
        assert!((l - 0.5).abs() < 1e-4);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        assert!((r - 1.0).abs() < 1e-4 && g.abs() < 1e-4 && b.abs() < 1e-4);
    }
}
