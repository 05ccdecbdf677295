//! Closed catalog of named filter presets.
//!
//! Each name maps to one fixed [`AdjustmentParams`] configuration. The
//! catalog is closed: there is no dynamic registration, so a preset's
//! output can be pinned by golden tests.

use crate::error::PipelineError;
use crate::params::AdjustmentParams;

/// Every name the catalog resolves, in presentation order.
pub const FILTER_NAMES: [&str; 5] = ["grayscale", "invert", "sepia", "blur", "special"];

/// Blur radius used by the `"blur"` preset, in pixels.
const BLUR_PRESET_RADIUS: f32 = 5.0;

/// The `"special"` composite, version 1: a warm, slightly muted look.
/// Changing these constants is a breaking change to pinned outputs.
const SPECIAL_V1: AdjustmentParams = AdjustmentParams {
    brightness: 100.0,
    contrast: 120.0,
    saturation: 80.0,
    blur: 0.0,
    hue: 0.0,
    sepia: 40.0,
    invert: 0.0,
    grayscale: 0.0,
};

/// Resolve a filter name to its preset configuration.
///
/// Matching is case-insensitive. The catalog is closed; see
/// [`FILTER_NAMES`] for the full set.
///
/// # Errors
///
/// Returns [`PipelineError::UnknownFilter`] for any name not in the
/// catalog.
pub fn resolve(name: &str) -> Result<AdjustmentParams, PipelineError> {
    match name.to_ascii_lowercase().as_str() {
        "grayscale" => Ok(AdjustmentParams {
            grayscale: 100.0,
            ..AdjustmentParams::NEUTRAL
        }),
        "invert" => Ok(AdjustmentParams {
            invert: 100.0,
            ..AdjustmentParams::NEUTRAL
        }),
        "sepia" => Ok(AdjustmentParams {
            sepia: 100.0,
            ..AdjustmentParams::NEUTRAL
        }),
        "blur" => Ok(AdjustmentParams {
            blur: BLUR_PRESET_RADIUS,
            ..AdjustmentParams::NEUTRAL
        }),
        "special" => Ok(SPECIAL_V1),
        _ => Err(PipelineError::UnknownFilter(name.to_string())),
    }
}
