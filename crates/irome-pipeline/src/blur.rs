//! Blur adjustment: Gaussian neighborhood averaging.
//!
//! Wraps [`imageproc::filter::gaussian_blur_f32`], which operates on a
//! single grayscale channel. The buffer is split into per-channel
//! `GrayImage`s, each blurred independently, then reassembled -- Gaussian
//! blur is a linear per-channel operation, so this is equivalent to
//! blurring in color space. Image edges are handled by clamping sample
//! coordinates to the buffer bounds (no wraparound).

use image::GrayImage;

use crate::buffer::PixelBuffer;

/// Kernel sigma per pixel of radius. Fixed contract: `sigma = radius / 2`.
const SIGMA_PER_RADIUS: f32 = 0.5;

/// Apply a Gaussian blur with the given kernel radius in pixels.
///
/// 0 is neutral and returns a bit-identical buffer. The kernel sigma is
/// `radius / 2`, so radius 20 corresponds to sigma 10. All channels,
/// including alpha, are blurred so translucent edges soften with their
/// color.
#[must_use = "returns the blurred buffer"]
pub fn adjust(buffer: &PixelBuffer, radius: f32) -> PixelBuffer {
    if radius <= 0.0 {
        return buffer.clone();
    }

    let sigma = radius * SIGMA_PER_RADIUS;
    let (width, height) = (buffer.width(), buffer.height());
    let channels = buffer.layout().channels();

    // Split into grayscale channels, blur each, reassemble row-major.
    let blurred: Vec<GrayImage> = (0..channels)
        .map(|c| {
            let plane = GrayImage::from_fn(width, height, |x, y| {
                image::Luma([buffer.sample(x, y, c)])
            });
            imageproc::filter::gaussian_blur_f32(&plane, sigma)
        })
        .collect();

    let mut data = Vec::with_capacity(buffer.data().len());
    for y in 0..height {
        for x in 0..width {
            for plane in &blurred {
                data.push(plane.get_pixel(x, y).0[0]);
            }
        }
    }

    PixelBuffer::new_unchecked(width, height, buffer.layout(), data)
}
