//! Stroke-cap compensation.
//!
//! Round and square caps extend half a stroke width past each end of an arc.
//! To keep the drawn arc as long as its logical sweep, both ends are pulled in
//! by the angle those half-widths subtend at the arc's radius.

use std::f32::consts::PI;

use crate::angles::{ArcAngles, FULL_CIRCLE};

/// Smallest sweep magnitude a compensated arc is reduced to.
pub const MIN_COMPENSATED_SWEEP: f32 = 0.0001;

/// Shape of a stroke's end points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeCap {
    /// Flat ends flush with the path.
    #[default]
    Butt,
    /// Semicircular ends.
    Round,
    /// Square ends projecting half the stroke width.
    Square,
}

impl StrokeCap {
    /// Whether this cap draws past the path's end points.
    pub fn extends_path(self) -> bool {
        !matches!(self, StrokeCap::Butt)
    }
}

/// Angle, in degrees, that half of `stroke_width` subtends at `radius`.
///
/// Zero for butt caps and for a non-positive radius.
///
/// ```
/// use circular_progress::{StrokeCap, compute_cap_angle};
///
/// let angle = compute_cap_angle(StrokeCap::Round, 10.0, 50.0);
/// assert!((angle - 5.7296).abs() < 1e-3);
/// assert_eq!(compute_cap_angle(StrokeCap::Butt, 10.0, 50.0), 0.0);
/// ```
pub fn compute_cap_angle(cap: StrokeCap, stroke_width: f32, radius: f32) -> f32 {
    if !cap.extends_path() || radius <= 0.0 {
        return 0.0;
    }
    90.0 * stroke_width / (PI * radius)
}

/// Pulls both ends of `angles` in by `cap_angle`.
///
/// Full circles and zero-length arcs are returned unchanged. The sweep never
/// changes sign: positive sweeps are floored at [`MIN_COMPENSATED_SWEEP`] and
/// negative ones ceilinged at its negation.
pub fn apply_cap_compensation(angles: ArcAngles, cap_angle: f32) -> ArcAngles {
    let ArcAngles { mut start, mut sweep } = angles;
    if cap_angle == 0.0 || sweep.abs() == FULL_CIRCLE {
        return angles;
    }
    if sweep > 0.0 {
        start += cap_angle;
        sweep = (sweep - cap_angle * 2.0).max(MIN_COMPENSATED_SWEEP);
    } else if sweep < 0.0 {
        start -= cap_angle;
        sweep = (sweep + cap_angle * 2.0).min(-MIN_COMPENSATED_SWEEP);
    }
    ArcAngles::new(start, sweep)
}
