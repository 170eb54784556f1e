//! Configuration surface of the circular progress indicator.

use std::time::Duration;

use derive_setters::Setters;

use crate::{
    color::Color,
    dp::Dp,
    easing::Easing,
    error::{ProgressError, ensure_finite},
    indeterminate::IndeterminateConfig,
    stroke_cap::StrokeCap,
};

/// Default values for [`CircularProgressArgs`].
pub struct CircularProgressDefaults;

impl CircularProgressDefaults {
    /// Size used when the parent leaves the widget size open.
    pub const SIZE: Dp = Dp(48.0);
    pub const MAXIMUM: f32 = 100.0;
    pub const PROGRESS: f32 = 0.0;
    /// 12 o'clock.
    pub const START_ANGLE: f32 = 270.0;
    pub const FOREGROUND_STROKE_WIDTH: Dp = Dp(3.0);
    pub const BACKGROUND_STROKE_WIDTH: Dp = Dp(1.0);
    pub const FOREGROUND_STROKE_COLOR: Color = Color::BLUE;
    pub const BACKGROUND_STROKE_COLOR: Color = Color::BLACK;
    pub const PROGRESS_ANIMATION_DURATION: Duration = Duration::from_millis(100);
}

/// Arguments for configuring a [`CircularProgressBar`](crate::CircularProgressBar).
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CircularProgressArgs {
    /// Current progress, in the same unit as `maximum`.
    pub progress: f32,
    /// Value at which the arc becomes a full circle. Must not be zero.
    pub maximum: f32,
    /// Where the determinate arc starts, in degrees within `-360..=360`.
    pub start_angle: f32,
    /// Show the indeterminate animation instead of the progress ratio.
    pub indeterminate: bool,
    /// Animate progress changes while the widget is on screen.
    pub animate_progress: bool,
    pub progress_animation_duration: Duration,
    pub progress_animation_easing: Easing,
    /// Shortest arc of the indeterminate animation, in degrees within `0..=180`.
    pub indeterminate_minimum_angle: f32,
    pub indeterminate_rotation_duration: Duration,
    pub indeterminate_rotation_easing: Easing,
    pub indeterminate_sweep_duration: Duration,
    pub indeterminate_sweep_easing: Easing,
    pub foreground_stroke_color: Color,
    pub foreground_stroke_width: Dp,
    pub foreground_stroke_cap: StrokeCap,
    pub background_stroke_color: Color,
    pub background_stroke_width: Dp,
    /// Draw a full circle behind the progress arc.
    pub draw_background_stroke: bool,
    /// Size used when the parent does not dictate one.
    pub default_size: Dp,
    /// Physical pixels per dp on the host display.
    pub scale_factor: f32,
}

impl Default for CircularProgressArgs {
    fn default() -> Self {
        let indeterminate = IndeterminateConfig::default();
        Self {
            progress: CircularProgressDefaults::PROGRESS,
            maximum: CircularProgressDefaults::MAXIMUM,
            start_angle: CircularProgressDefaults::START_ANGLE,
            indeterminate: false,
            animate_progress: true,
            progress_animation_duration: CircularProgressDefaults::PROGRESS_ANIMATION_DURATION,
            progress_animation_easing: Easing::DECELERATE,
            indeterminate_minimum_angle: indeterminate.minimum_angle,
            indeterminate_rotation_duration: indeterminate.rotation_duration,
            indeterminate_rotation_easing: indeterminate.rotation_easing,
            indeterminate_sweep_duration: indeterminate.sweep_duration,
            indeterminate_sweep_easing: indeterminate.sweep_easing,
            foreground_stroke_color: CircularProgressDefaults::FOREGROUND_STROKE_COLOR,
            foreground_stroke_width: CircularProgressDefaults::FOREGROUND_STROKE_WIDTH,
            foreground_stroke_cap: StrokeCap::Butt,
            background_stroke_color: CircularProgressDefaults::BACKGROUND_STROKE_COLOR,
            background_stroke_width: CircularProgressDefaults::BACKGROUND_STROKE_WIDTH,
            draw_background_stroke: false,
            default_size: CircularProgressDefaults::SIZE,
            scale_factor: 1.0,
        }
    }
}

impl CircularProgressArgs {
    /// The indeterminate animation parameters held by these arguments.
    pub fn indeterminate_config(&self) -> IndeterminateConfig {
        IndeterminateConfig {
            minimum_angle: self.indeterminate_minimum_angle,
            rotation_duration: self.indeterminate_rotation_duration,
            rotation_easing: self.indeterminate_rotation_easing,
            sweep_duration: self.indeterminate_sweep_duration,
            sweep_easing: self.indeterminate_sweep_easing,
        }
    }

    /// Checks every field, returning the arguments unchanged when valid.
    pub fn validate(self) -> Result<Self, ProgressError> {
        ensure_finite("progress", self.progress)?;
        validate_maximum(self.maximum)?;
        validate_start_angle(self.start_angle)?;
        self.progress_animation_easing.validate()?;
        self.indeterminate_config().validate()?;
        validate_stroke_width(self.foreground_stroke_width.0 as f32)?;
        validate_stroke_width(self.background_stroke_width.0 as f32)?;
        validate_size("default size", self.default_size.0 as f32)?;
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ProgressError::InvalidScaleFactor(self.scale_factor));
        }
        Ok(self)
    }
}

pub(crate) fn validate_maximum(maximum: f32) -> Result<f32, ProgressError> {
    let maximum = ensure_finite("maximum", maximum)?;
    if maximum == 0.0 {
        return Err(ProgressError::ZeroMaximum);
    }
    Ok(maximum)
}

pub(crate) fn validate_start_angle(angle: f32) -> Result<f32, ProgressError> {
    let angle = ensure_finite("start angle", angle)?;
    if !(-360.0..=360.0).contains(&angle) {
        return Err(ProgressError::StartAngleOutOfRange(angle));
    }
    Ok(angle)
}

pub(crate) fn validate_size(field: &'static str, size: f32) -> Result<f32, ProgressError> {
    let size = ensure_finite(field, size)?;
    if size < 0.0 {
        return Err(ProgressError::NegativeSize(size));
    }
    Ok(size)
}

pub(crate) fn validate_stroke_width(width: f32) -> Result<f32, ProgressError> {
    let width = ensure_finite("stroke width", width)?;
    if width < 0.0 {
        return Err(ProgressError::NegativeStrokeWidth(width));
    }
    Ok(width)
}
