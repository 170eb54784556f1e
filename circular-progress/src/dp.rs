//! # Density-Independent Pixels (Dp)
//!
//! Lengths in the configuration surface are expressed in [`Dp`] so that an
//! indicator keeps the same physical size on screens of different densities.
//! Unlike the runtime angles, which are always in degrees, every length the
//! indicator works with at draw time is in physical pixels; the host supplies
//! the scale factor used for the conversion.
//!
//! ## Usage
//!
//! ```
//! use circular_progress::Dp;
//!
//! let stroke = Dp(3.0);
//! assert_eq!(stroke.to_px(2.0), 6.0);
//! assert_eq!(Dp::from_px(96.0, 2.0), Dp(48.0));
//! ```

/// Density-independent pixels.
///
/// One dp equals one physical pixel at a scale factor of `1.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// A zero-length value.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels with the given scale factor.
    pub fn to_px(self, scale_factor: f32) -> f32 {
        (self.0 * scale_factor as f64) as f32
    }

    /// Converts to physical pixels and rounds to the nearest whole pixel.
    ///
    /// Default stroke widths and sizes are snapped this way so that thin
    /// strokes stay crisp.
    pub fn to_rounded_px(self, scale_factor: f32) -> f32 {
        self.to_px(scale_factor).round()
    }

    /// Converts a physical pixel length back to dp.
    pub fn from_px(px: f32, scale_factor: f32) -> Self {
        Dp(px as f64 / scale_factor as f64)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px() {
        assert_eq!(Dp(48.0).to_px(1.0), 48.0);
        assert_eq!(Dp(48.0).to_px(2.5), 120.0);
    }

    #[test]
    fn test_dp_rounding() {
        assert_eq!(Dp(3.0).to_rounded_px(1.5), 5.0);
        assert_eq!(Dp(1.0).to_rounded_px(1.25), 1.0);
    }
}
