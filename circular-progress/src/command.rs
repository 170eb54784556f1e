use crate::{color::Color, geometry::DrawRect, stroke_cap::StrokeCap};

/// Draw command for a circular arc stroke.
///
/// The host strokes the arc of the circle inscribed in `rect`; a sweep of
/// ±360° is a full oval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCommand {
    /// Bounds of the circle the arc lies on.
    pub rect: DrawRect,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Stroke cap applied to arc ends.
    pub cap: StrokeCap,
}

impl ArcCommand {
    /// Whether this command strokes the whole circle.
    pub fn is_full_circle(&self) -> bool {
        self.sweep_angle_degrees.abs() >= 360.0
    }

    /// Scales the command's alpha, e.g. when the host fades the indicator.
    pub fn apply_opacity(&mut self, opacity: f32) {
        self.color = self
            .color
            .with_alpha(self.color.a * opacity.clamp(0.0, 1.0));
    }
}
