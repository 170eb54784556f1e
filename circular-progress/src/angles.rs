//! Determinate-mode angle resolution.

use crate::error::{ProgressError, ensure_finite};

/// A full turn, in degrees.
pub const FULL_CIRCLE: f32 = 360.0;

/// Start and sweep of an arc, in degrees.
///
/// Angles follow the host's convention: 0° at 3 o'clock, positive sweep
/// running clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcAngles {
    pub start: f32,
    pub sweep: f32,
}

impl ArcAngles {
    pub const fn new(start: f32, sweep: f32) -> Self {
        Self { start, sweep }
    }
}

/// Resolves the foreground arc for a determinate `progress` out of `maximum`.
///
/// The start angle is passed through unchanged. The sweep is the progress
/// ratio scaled to a full circle, saturating at 360° once `|progress|`
/// reaches `|maximum|`; the sign follows `progress / maximum`.
///
/// # Errors
///
/// Returns [`ProgressError::ZeroMaximum`] for a zero maximum and
/// [`ProgressError::NonFinite`] for NaN or infinite inputs.
///
/// # Examples
///
/// ```
/// use circular_progress::resolve_progress_angles;
///
/// let angles = resolve_progress_angles(50.0, 100.0, 270.0).unwrap();
/// assert_eq!(angles.start, 270.0);
/// assert_eq!(angles.sweep, 180.0);
/// ```
pub fn resolve_progress_angles(
    progress: f32,
    maximum: f32,
    start_angle: f32,
) -> Result<ArcAngles, ProgressError> {
    let progress = ensure_finite("progress", progress)?;
    let maximum = ensure_finite("maximum", maximum)?;
    let start_angle = ensure_finite("start angle", start_angle)?;
    if maximum == 0.0 {
        return Err(ProgressError::ZeroMaximum);
    }
    Ok(ArcAngles::new(start_angle, progress_sweep(progress, maximum)))
}

/// Sweep for an already validated, non-zero `maximum`.
pub(crate) fn progress_sweep(progress: f32, maximum: f32) -> f32 {
    debug_assert!(maximum != 0.0);
    if progress.abs() < maximum.abs() {
        progress / maximum * FULL_CIRCLE
    } else {
        FULL_CIRCLE
    }
}
