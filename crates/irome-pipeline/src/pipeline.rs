//! Fixed-order composition of the adjustment stages.
//!
//! Adjustments are not commutative (blur-then-invert differs from
//! invert-then-blur), so the pipeline applies them in one documented
//! order regardless of which parameters are active:
//!
//! 1. Grayscale
//! 2. Sepia
//! 3. Invert
//! 4. Hue
//! 5. Saturation
//! 6. Contrast
//! 7. Brightness
//! 8. Blur
//!
//! Color-space conversions run first, tonal scaling next, spatial
//! smoothing last so blur is not re-sharpened by a later contrast stage.

use std::borrow::Cow;

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::params::{
    AdjustmentParams, BLUR_NEUTRAL, BRIGHTNESS_NEUTRAL, CONTRAST_NEUTRAL, GRAYSCALE_NEUTRAL,
    HUE_NEUTRAL, INVERT_NEUTRAL, SATURATION_NEUTRAL, SEPIA_NEUTRAL, differs_from_neutral,
};
use crate::{blur, brightness, contrast, grayscale, hue, invert, saturate, sepia};

/// Apply the full adjustment pipeline to a buffer.
///
/// All parameters are validated before any stage runs, so an invalid
/// snapshot performs no pixel work at all. Stages whose parameter sits at
/// its neutral value are skipped -- sound only because every stage at
/// neutral is a guaranteed no-op. With an all-neutral snapshot the input
/// is returned as a bit-identical copy.
///
/// Rendering is deterministic: identical inputs produce bit-identical
/// output, including under rayon's within-stage row parallelism.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidParameter`] naming the first
/// out-of-range field. Never fails for in-range parameters.
pub fn render(
    buffer: &PixelBuffer,
    params: &AdjustmentParams,
) -> Result<PixelBuffer, PipelineError> {
    params.validate()?;
    tracing::trace!(dimensions = ?buffer.dimensions(), "rendering adjustment pipeline");

    let mut current = Cow::Borrowed(buffer);
    if differs_from_neutral(params.grayscale, GRAYSCALE_NEUTRAL) {
        current = Cow::Owned(grayscale::adjust(&current, params.grayscale));
    }
    if differs_from_neutral(params.sepia, SEPIA_NEUTRAL) {
        current = Cow::Owned(sepia::adjust(&current, params.sepia));
    }
    if differs_from_neutral(params.invert, INVERT_NEUTRAL) {
        current = Cow::Owned(invert::adjust(&current, params.invert));
    }
    if differs_from_neutral(params.hue, HUE_NEUTRAL) {
        current = Cow::Owned(hue::adjust(&current, params.hue));
    }
    if differs_from_neutral(params.saturation, SATURATION_NEUTRAL) {
        current = Cow::Owned(saturate::adjust(&current, params.saturation));
    }
    if differs_from_neutral(params.contrast, CONTRAST_NEUTRAL) {
        current = Cow::Owned(contrast::adjust(&current, params.contrast));
    }
    if differs_from_neutral(params.brightness, BRIGHTNESS_NEUTRAL) {
        current = Cow::Owned(brightness::adjust(&current, params.brightness));
    }
    if differs_from_neutral(params.blur, BLUR_NEUTRAL) {
        current = Cow::Owned(blur::adjust(&current, params.blur));
    }

    Ok(current.into_owned())
}
