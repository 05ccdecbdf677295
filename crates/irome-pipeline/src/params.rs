//! Adjustment parameter snapshot and its validation rules.
//!
//! Every parameter has a declared valid range and a neutral value at which
//! its stage is a guaranteed no-op. [`AdjustmentParams::default`] is the
//! all-neutral snapshot, so a default-constructed pipeline passes the input
//! through bit-identically.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Valid range for brightness, in percent.
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.0..=200.0;
/// Valid range for contrast, in percent.
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.0..=200.0;
/// Valid range for saturation, in percent.
pub const SATURATION_RANGE: RangeInclusive<f32> = 0.0..=200.0;
/// Valid range for blur, in pixels of kernel radius.
pub const BLUR_RANGE: RangeInclusive<f32> = 0.0..=20.0;
/// Valid range for hue rotation, in degrees.
pub const HUE_RANGE: RangeInclusive<f32> = -180.0..=180.0;
/// Valid range for sepia strength, in percent.
pub const SEPIA_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Valid range for invert strength, in percent.
pub const INVERT_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Valid range for grayscale strength, in percent.
pub const GRAYSCALE_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Neutral brightness: multiplicative identity.
pub const BRIGHTNESS_NEUTRAL: f32 = 100.0;
/// Neutral contrast: deviation from mid-gray scaled by 1.
pub const CONTRAST_NEUTRAL: f32 = 100.0;
/// Neutral saturation: chroma scaled by 1.
pub const SATURATION_NEUTRAL: f32 = 100.0;
/// Neutral blur: zero-radius kernel.
pub const BLUR_NEUTRAL: f32 = 0.0;
/// Neutral hue: zero-degree rotation.
pub const HUE_NEUTRAL: f32 = 0.0;
/// Neutral sepia: zero blend toward the sepia transform.
pub const SEPIA_NEUTRAL: f32 = 0.0;
/// Neutral invert: zero blend toward the inverted sample.
pub const INVERT_NEUTRAL: f32 = 0.0;
/// Neutral grayscale: zero blend toward luma gray.
pub const GRAYSCALE_NEUTRAL: f32 = 0.0;

/// One full parameter snapshot for the real-time editing pipeline.
///
/// Fields deserialize with `#[serde(default)]`, so a partial snapshot
/// (e.g. `{"blur": 4}`) fills the remaining parameters with their neutral
/// values rather than zeroes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    /// Multiplicative channel scale, percent. 100 is neutral.
    pub brightness: f32,
    /// Scale of deviation from mid-gray (128), percent. 100 is neutral.
    pub contrast: f32,
    /// Scale of chroma relative to per-pixel luma, percent. 100 is neutral.
    pub saturation: f32,
    /// Gaussian blur kernel radius in pixels. 0 is neutral.
    pub blur: f32,
    /// Hue rotation in degrees, applied in HSL space. 0 is neutral.
    pub hue: f32,
    /// Blend toward the sepia matrix transform, percent. 0 is neutral.
    pub sepia: f32,
    /// Blend toward the inverted sample, percent. 0 is neutral.
    pub invert: f32,
    /// Blend toward Rec.601 luma gray, percent. 0 is neutral.
    pub grayscale: f32,
}

impl AdjustmentParams {
    /// The all-neutral snapshot: every stage is a no-op.
    pub const NEUTRAL: Self = Self {
        brightness: BRIGHTNESS_NEUTRAL,
        contrast: CONTRAST_NEUTRAL,
        saturation: SATURATION_NEUTRAL,
        blur: BLUR_NEUTRAL,
        hue: HUE_NEUTRAL,
        sepia: SEPIA_NEUTRAL,
        invert: INVERT_NEUTRAL,
        grayscale: GRAYSCALE_NEUTRAL,
    };

    /// Check every field against its declared range.
    ///
    /// Validation runs before any pipeline stage: an invalid snapshot is
    /// rejected whole, never partially applied. Non-finite values
    /// (NaN, infinities) are rejected alongside out-of-range ones.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidParameter`] naming the first
    /// offending field and its valid range.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let checks: [(&'static str, f32, RangeInclusive<f32>); 8] = [
            ("brightness", self.brightness, BRIGHTNESS_RANGE),
            ("contrast", self.contrast, CONTRAST_RANGE),
            ("saturation", self.saturation, SATURATION_RANGE),
            ("blur", self.blur, BLUR_RANGE),
            ("hue", self.hue, HUE_RANGE),
            ("sepia", self.sepia, SEPIA_RANGE),
            ("invert", self.invert, INVERT_RANGE),
            ("grayscale", self.grayscale, GRAYSCALE_RANGE),
        ];
        for (field, value, range) in checks {
            if !value.is_finite() || !range.contains(&value) {
                return Err(PipelineError::InvalidParameter {
                    field,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }

    /// Whether every field sits at its neutral value.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Whether `value` differs from the stage's neutral value.
///
/// Used by the pipeline to skip stages, which is sound only because each
/// stage at its neutral value is a guaranteed no-op.
#[must_use]
pub(crate) fn differs_from_neutral(value: f32, neutral: f32) -> bool {
    (value - neutral).abs() > f32::EPSILON
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        let params = AdjustmentParams::default();
        assert!(params.is_neutral());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn neutral_values_match_declared_table() {
        let params = AdjustmentParams::NEUTRAL;
        assert!((params.brightness - 100.0).abs() < f32::EPSILON);
        assert!((params.contrast - 100.0).abs() < f32::EPSILON);
        assert!((params.saturation - 100.0).abs() < f32::EPSILON);
        assert!(params.blur.abs() < f32::EPSILON);
        assert!(params.hue.abs() < f32::EPSILON);
        assert!(params.sepia.abs() < f32::EPSILON);
        assert!(params.invert.abs() < f32::EPSILON);
        assert!(params.grayscale.abs() < f32::EPSILON);
    }

    #[test]
    fn negative_brightness_rejected() {
        let params = AdjustmentParams {
            brightness: -5.0,
            ..AdjustmentParams::NEUTRAL
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameter {
                field: "brightness",
                ..
            }
        ));
    }

    #[test]
    fn blur_above_range_rejected() {
        let params = AdjustmentParams {
            blur: 25.0,
            ..AdjustmentParams::NEUTRAL
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameter {
                field: "blur",
                min,
                max,
                ..
            } if min.abs() < f32::EPSILON && (max - 20.0).abs() < f32::EPSILON
        ));
    }

    #[test]
    fn hue_accepts_negative_degrees() {
        let params = AdjustmentParams {
            hue: -180.0,
            ..AdjustmentParams::NEUTRAL
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn nan_rejected() {
        let params = AdjustmentParams {
            contrast: f32::NAN,
            ..AdjustmentParams::NEUTRAL
        };
        assert!(matches!(
            params.validate(),
            Err(PipelineError::InvalidParameter {
                field: "contrast",
                ..
            })
        ));
    }

    #[test]
    fn range_endpoints_accepted() {
        let low = AdjustmentParams {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            blur: 0.0,
            hue: -180.0,
            sepia: 0.0,
            invert: 0.0,
            grayscale: 0.0,
        };
        assert!(low.validate().is_ok());

        let high = AdjustmentParams {
            brightness: 200.0,
            contrast: 200.0,
            saturation: 200.0,
            blur: 20.0,
            hue: 180.0,
            sepia: 100.0,
            invert: 100.0,
            grayscale: 100.0,
        };
        assert!(high.validate().is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let params = AdjustmentParams {
            brightness: 120.0,
            blur: 2.5,
            hue: -45.0,
            ..AdjustmentParams::NEUTRAL
        };
        let json = serde_json::to_string(&params).unwrap();
        let deserialized: AdjustmentParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, deserialized);
    }

    #[test]
    fn partial_snapshot_fills_neutral_defaults() {
        let params: AdjustmentParams = serde_json::from_str(r#"{"blur": 4.0}"#).unwrap();
        assert!((params.blur - 4.0).abs() < f32::EPSILON);
        assert!((params.brightness - 100.0).abs() < f32::EPSILON);
        assert!(params.invert.abs() < f32::EPSILON);
    }

    #[test]
    fn differs_from_neutral_detects_change() {
        assert!(!differs_from_neutral(100.0, 100.0));
        assert!(differs_from_neutral(100.1, 100.0));
        assert!(differs_from_neutral(-0.5, 0.0));
    }
}
