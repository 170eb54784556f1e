//! Configuration errors reported by the progress indicator.

use thiserror::Error;

/// Errors raised when a progress indicator is given an invalid configuration.
///
/// Every variant is reported synchronously by the setter or constructor that
/// received the value; the previously stored configuration is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProgressError {
    /// The maximum value is zero, so no progress ratio can be computed.
    #[error("maximum value must not be zero")]
    ZeroMaximum,
    /// A numeric input was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The start angle lies outside `-360..=360` degrees.
    #[error("start angle value should be between -360 and 360 degrees (inclusive), got {0}")]
    StartAngleOutOfRange(f32),
    /// The indeterminate minimum angle lies outside `0..=180` degrees.
    #[error(
        "indeterminate minimum angle value should be between 0 and 180 degrees (inclusive), got {0}"
    )]
    MinimumAngleOutOfRange(f32),
    /// A stroke width is negative.
    #[error("stroke width can't be negative, got {0}")]
    NegativeStrokeWidth(f32),
    /// A widget size is negative.
    #[error("size can't be negative, got {0}")]
    NegativeSize(f32),
    /// An easing curve was built from unusable parameters.
    #[error("invalid easing curve: {0}")]
    InvalidEasing(&'static str),
    /// The display scale factor is not strictly positive.
    #[error("scale factor must be positive, got {0}")]
    InvalidScaleFactor(f32),
}

pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, ProgressError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProgressError::NonFinite { field, value })
    }
}
