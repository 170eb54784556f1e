//! Easing curves for progress transitions and indeterminate oscillators.
//!
//! Every curve maps linear progress in `[0.0, 1.0]` to eased progress in
//! `[0.0, 1.0]`, with `0.0 -> 0.0` and `1.0 -> 1.0`.

use crate::error::ProgressError;

/// Interpolation curve applied to an oscillator's linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant rate of change.
    Linear,
    /// Starts slowly and speeds up. The factor controls how pronounced it is.
    Accelerate(f32),
    /// Starts quickly and settles slowly. The factor controls how pronounced
    /// it is.
    Decelerate(f32),
    /// Cosine ease-in-out.
    AccelerateDecelerate,
    /// Cubic ease-in-out.
    EaseInOutCubic,
    /// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

impl Easing {
    /// Default decelerating curve used for progress transitions and the
    /// indeterminate sweep.
    pub const DECELERATE: Easing = Easing::Decelerate(1.0);

    /// Material "standard" curve.
    pub const STANDARD: Easing = Easing::CubicBezier {
        x1: 0.2,
        y1: 0.0,
        x2: 0.0,
        y2: 1.0,
    };

    /// Material "emphasized decelerate" curve.
    pub const EMPHASIZED_DECELERATE: Easing = Easing::CubicBezier {
        x1: 0.05,
        y1: 0.7,
        x2: 0.1,
        y2: 1.0,
    };

    /// Checks that the curve parameters produce a usable mapping.
    pub fn validate(self) -> Result<Self, ProgressError> {
        match self {
            Easing::Accelerate(factor) | Easing::Decelerate(factor) => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(ProgressError::InvalidEasing("factor must be positive"));
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                    return Err(ProgressError::InvalidEasing(
                        "control points must be finite",
                    ));
                }
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(ProgressError::InvalidEasing(
                        "control point x must lie in 0..=1",
                    ));
                }
            }
            Easing::Linear | Easing::AccelerateDecelerate | Easing::EaseInOutCubic => {}
        }
        Ok(self)
    }

    /// Maps a linear fraction to the eased fraction.
    pub fn transform(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate(factor) => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
            Easing::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_easing(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::DECELERATE
    }
}

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}
