//! Sepia adjustment: blend toward the classic sepia matrix transform.

use crate::buffer::PixelBuffer;
use crate::params::{SEPIA_NEUTRAL, differs_from_neutral};

/// The standard sepia tone matrix, rows ordered R, G, B.
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Blend each pixel toward its sepia-transformed value by `percent / 100`.
///
/// The full-strength target is the matrix product
/// `r' = 0.393r + 0.769g + 0.189b` (and the matching rows for green and
/// blue), clamped to the sample range before blending. 0 is neutral and
/// returns a bit-identical buffer. Alpha is untouched.
#[must_use = "returns the adjusted buffer"]
pub fn adjust(buffer: &PixelBuffer, percent: f32) -> PixelBuffer {
    if !differs_from_neutral(percent, SEPIA_NEUTRAL) {
        return buffer.clone();
    }

    let t = percent / 100.0;
    buffer.map_color_pixels(move |[r, g, b]| {
        let toned = SEPIA_MATRIX.map(|[wr, wg, wb]| {
            (wr * r + wg * g + wb * b).min(255.0)
        });
        [
            r + (toned[0] - r) * t,
            g + (toned[1] - g) * t,
            b + (toned[2] - b) * t,
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
        let buf = solid([90, 160, 210]);
        assert_eq!(adjust(&buf, 0.0), buf);
    }

    #[test]
    fn full_sepia_matches_matrix() {
        // (50, 100, 150): r' = 19.65 + 76.9 + 28.35 = 124.9 -> 125
        //                 g' = 17.45 + 68.6 + 25.2 = 111.25 -> 111
        //                 b' = 13.6 + 53.4 + 19.65 = 86.65 -> 87
        let buf = solid([50, 100, 150]);
        let toned = adjust(&buf, 100.0);
        assert_eq!(&toned.data()[..3], &[125, 111, 87]);
    }

    #[test]
    fn sepia_warms_toward_red_over_blue() {
        let buf = solid([128, 128, 128]);
        let toned = adjust(&buf, 100.0);
        let pixel = &toned.data()[..3];
        assert!(
            pixel[0] > pixel[1] && pixel[1] > pixel[2],
            "expected R > G > B, got {pixel:?}"
        );
    }

    #[test]
    fn white_stays_clamped_in_range() {
        // The matrix rows sum above 1.0, so white overshoots and must clamp.
        let buf = solid([255, 255, 255]);
        let toned = adjust(&buf, 100.0);
        assert_eq!(&toned.data()[..3], &[255, 255, 239]);
    }

    #[test]
    fn partial_sepia_blends_linearly() {
        // 40% of the way from (100, 150, 200) to the matrix output:
        // r = 100 + 92.45*0.4 = 136.98 -> 137
        // g = 150 + 21.4*0.4 = 158.56 -> 159
        // b = 200 - 66.5*0.4 = 173.4 -> 173
        let buf = solid([100, 150, 200]);
        let toned = adjust(&buf, 40.0);
        assert_eq!(&toned.data()[..3], &[137, 159, 173]);
    }
}
