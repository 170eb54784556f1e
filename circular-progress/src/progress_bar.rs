//! Host-facing model of a circular progress indicator.
//!
//! [`CircularProgressBar`] owns the configuration, layout and animation state
//! of one indicator. The host forwards lifecycle signals, size changes and
//! frame times to it, and reads back the stroke commands to draw each frame.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use circular_progress::{CircularProgressArgs, CircularProgressBar, SizeConstraint};
//!
//! let mut bar = CircularProgressBar::new(CircularProgressArgs::default().progress(50.0))?;
//! bar.on_attached();
//! bar.measure(SizeConstraint::Exact(100.0), SizeConstraint::Exact(100.0))?;
//!
//! bar.advance(Duration::from_millis(16));
//! let commands = bar.draw();
//! assert_eq!(commands.len(), 1);
//! assert_eq!(commands[0].sweep_angle_degrees, 180.0);
//! # Ok::<(), circular_progress::ProgressError>(())
//! ```

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    angles::{ArcAngles, FULL_CIRCLE, progress_sweep},
    args::{
        CircularProgressArgs, validate_maximum, validate_size, validate_start_angle,
        validate_stroke_width,
    },
    color::Color,
    command::ArcCommand,
    easing::Easing,
    error::{ProgressError, ensure_finite},
    geometry::{DrawRect, SizeConstraint},
    indeterminate::{IndeterminateConfig, IndeterminateEngine, IndeterminateState},
    stroke_cap::{StrokeCap, apply_cap_compensation, compute_cap_angle},
    transition::ProgressTransition,
};

/// Commands produced for one frame: the optional background circle followed
/// by the foreground arc.
pub type FrameCommands = SmallVec<[ArcCommand; 2]>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stroke {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

/// State of one circular progress indicator.
#[derive(Debug, Clone)]
pub struct CircularProgressBar {
    maximum: f32,
    start_angle: f32,
    progress: ProgressTransition,
    animate_progress: bool,
    indeterminate: bool,
    engine: IndeterminateEngine,
    foreground: Stroke,
    background: Stroke,
    draw_background_stroke: bool,
    default_size: f32,
    size: Option<(f32, f32)>,
    draw_rect: Option<DrawRect>,
    cap_angle: f32,
    attached: bool,
    visible: bool,
    invalidated: bool,
    last_frame: Option<Instant>,
}

impl CircularProgressBar {
    /// Creates a detached indicator from validated arguments.
    pub fn new(args: CircularProgressArgs) -> Result<Self, ProgressError> {
        let args = args.validate()?;
        let scale = args.scale_factor;
        Ok(Self {
            maximum: args.maximum,
            start_angle: args.start_angle,
            progress: ProgressTransition::new(
                args.progress,
                args.progress_animation_duration,
                args.progress_animation_easing,
            ),
            animate_progress: args.animate_progress,
            indeterminate: args.indeterminate,
            engine: IndeterminateEngine::new(args.indeterminate_config())?,
            foreground: Stroke {
                color: args.foreground_stroke_color,
                width: args.foreground_stroke_width.to_rounded_px(scale),
                cap: args.foreground_stroke_cap,
            },
            background: Stroke {
                color: args.background_stroke_color,
                width: args.background_stroke_width.to_rounded_px(scale),
                cap: StrokeCap::Butt,
            },
            draw_background_stroke: args.draw_background_stroke,
            default_size: args.default_size.to_rounded_px(scale),
            size: None,
            draw_rect: None,
            cap_angle: 0.0,
            attached: false,
            visible: true,
            invalidated: true,
            last_frame: None,
        })
    }

    // Determinate progress.

    /// The most recently requested progress value.
    pub fn progress(&self) -> f32 {
        self.progress.target()
    }

    /// The progress value shown this frame, which lags behind
    /// [`progress`](Self::progress) while a transition runs.
    pub fn displayed_progress(&self) -> f32 {
        self.progress.value()
    }

    /// Sets the progress value.
    ///
    /// While the indicator is on screen and `animate_progress` is enabled the
    /// change is animated from the currently displayed value; a change during
    /// a transition replaces its target. In indeterminate mode the value is
    /// stored for later without animating.
    pub fn set_progress(&mut self, progress: f32) -> Result<(), ProgressError> {
        let progress = ensure_finite("progress", progress)?;
        if !self.indeterminate && self.is_live() && self.animate_progress {
            self.progress.animate_to(progress);
        } else {
            self.progress.snap_to(progress);
        }
        self.invalidate();
        Ok(())
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Sets the maximum. Zero is rejected.
    pub fn set_maximum(&mut self, maximum: f32) -> Result<(), ProgressError> {
        self.maximum = validate_maximum(maximum)?;
        self.invalidate();
        Ok(())
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Sets the determinate start angle, within `-360..=360` degrees.
    pub fn set_start_angle(&mut self, angle: f32) -> Result<(), ProgressError> {
        self.start_angle = validate_start_angle(angle)?;
        self.invalidate();
        Ok(())
    }

    pub fn is_animate_progress(&self) -> bool {
        self.animate_progress
    }

    pub fn set_animate_progress(&mut self, animate: bool) {
        self.animate_progress = animate;
    }

    pub fn progress_animation_duration(&self) -> Duration {
        self.progress.duration()
    }

    /// Sets the progress transition duration, finishing any running
    /// transition first.
    pub fn set_progress_animation_duration(&mut self, duration: Duration) {
        if self.is_live() {
            self.progress.end();
        }
        self.progress.set_duration(duration);
        self.invalidate();
    }

    pub fn progress_animation_easing(&self) -> Easing {
        self.progress.easing()
    }

    /// Sets the progress transition curve, finishing any running transition
    /// first.
    pub fn set_progress_animation_easing(&mut self, easing: Easing) -> Result<(), ProgressError> {
        let easing = easing.validate()?;
        if self.is_live() {
            self.progress.end();
        }
        self.progress.set_easing(easing);
        self.invalidate();
        Ok(())
    }

    // Indeterminate mode.

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Switches between determinate and indeterminate mode.
    ///
    /// Leaving indeterminate mode stops the animation and returns it to its
    /// baseline; entering it on screen finishes any progress transition and
    /// starts the animation. Setting the current mode again does nothing.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        if self.indeterminate == indeterminate {
            trace!(indeterminate, "progress mode unchanged");
            return;
        }
        debug!(indeterminate, "switching progress mode");
        self.engine.stop();
        self.indeterminate = indeterminate;
        self.invalidate();
        if indeterminate && self.is_live() {
            self.progress.end();
            self.engine.start();
        }
    }

    pub fn indeterminate_config(&self) -> &IndeterminateConfig {
        self.engine.config()
    }

    /// Replaces all indeterminate animation parameters at once.
    pub fn set_indeterminate_config(
        &mut self,
        config: IndeterminateConfig,
    ) -> Result<(), ProgressError> {
        self.engine.reconfigure(config)?;
        self.invalidate();
        Ok(())
    }

    pub fn indeterminate_minimum_angle(&self) -> f32 {
        self.engine.config().minimum_angle
    }

    /// Sets the shortest indeterminate arc, within `0..=180` degrees. Restarts
    /// the animation from its baseline.
    pub fn set_indeterminate_minimum_angle(&mut self, angle: f32) -> Result<(), ProgressError> {
        let config = IndeterminateConfig {
            minimum_angle: angle,
            ..*self.engine.config()
        };
        self.set_indeterminate_config(config)
    }

    pub fn set_indeterminate_rotation_duration(
        &mut self,
        duration: Duration,
    ) -> Result<(), ProgressError> {
        let config = IndeterminateConfig {
            rotation_duration: duration,
            ..*self.engine.config()
        };
        self.set_indeterminate_config(config)
    }

    pub fn set_indeterminate_rotation_easing(
        &mut self,
        easing: Easing,
    ) -> Result<(), ProgressError> {
        let config = IndeterminateConfig {
            rotation_easing: easing,
            ..*self.engine.config()
        };
        self.set_indeterminate_config(config)
    }

    pub fn set_indeterminate_sweep_duration(
        &mut self,
        duration: Duration,
    ) -> Result<(), ProgressError> {
        let config = IndeterminateConfig {
            sweep_duration: duration,
            ..*self.engine.config()
        };
        self.set_indeterminate_config(config)
    }

    pub fn set_indeterminate_sweep_easing(
        &mut self,
        easing: Easing,
    ) -> Result<(), ProgressError> {
        let config = IndeterminateConfig {
            sweep_easing: easing,
            ..*self.engine.config()
        };
        self.set_indeterminate_config(config)
    }

    /// Snapshot of the indeterminate animation.
    pub fn indeterminate_state(&self) -> IndeterminateState {
        self.engine.state()
    }

    // Strokes.

    pub fn foreground_stroke_cap(&self) -> StrokeCap {
        self.foreground.cap
    }

    pub fn set_foreground_stroke_cap(&mut self, cap: StrokeCap) {
        self.foreground.cap = cap;
        self.update_cap_angle();
        self.invalidate();
    }

    pub fn foreground_stroke_color(&self) -> Color {
        self.foreground.color
    }

    pub fn set_foreground_stroke_color(&mut self, color: Color) {
        self.foreground.color = color;
        self.invalidate();
    }

    /// Foreground stroke width in physical pixels.
    pub fn foreground_stroke_width(&self) -> f32 {
        self.foreground.width
    }

    /// Sets the foreground stroke width in physical pixels.
    pub fn set_foreground_stroke_width(&mut self, width: f32) -> Result<(), ProgressError> {
        self.foreground.width = validate_stroke_width(width)?;
        self.update_draw_rect();
        self.invalidate();
        Ok(())
    }

    pub fn background_stroke_color(&self) -> Color {
        self.background.color
    }

    pub fn set_background_stroke_color(&mut self, color: Color) {
        self.background.color = color;
        self.invalidate();
    }

    /// Background stroke width in physical pixels.
    pub fn background_stroke_width(&self) -> f32 {
        self.background.width
    }

    /// Sets the background stroke width in physical pixels.
    pub fn set_background_stroke_width(&mut self, width: f32) -> Result<(), ProgressError> {
        self.background.width = validate_stroke_width(width)?;
        self.update_draw_rect();
        self.invalidate();
        Ok(())
    }

    pub fn is_draw_background_stroke(&self) -> bool {
        self.draw_background_stroke
    }

    pub fn set_draw_background_stroke(&mut self, draw: bool) {
        self.draw_background_stroke = draw;
        self.update_draw_rect();
        self.invalidate();
    }

    // Lifecycle.

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The indicator has been attached to a live rendering context.
    ///
    /// Attaching also marks the indicator visible; a later
    /// [`on_visibility_changed`](Self::on_visibility_changed) can hide it again.
    pub fn on_attached(&mut self) {
        self.attached = true;
        self.visible = true;
        self.sync_engine();
    }

    /// The indicator has left its rendering context. Stops every animation;
    /// a running progress transition jumps to its target.
    pub fn on_detached(&mut self) {
        self.attached = false;
        self.engine.stop();
        self.progress.end();
        self.last_frame = None;
    }

    /// The effective visibility of the indicator changed.
    pub fn on_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;
        if self.indeterminate {
            self.sync_engine();
        } else if !visible {
            self.progress.end();
        }
    }

    // Layout.

    /// Resolves the widget size against its parent's constraints and updates
    /// the draw rect.
    pub fn measure(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Result<(f32, f32), ProgressError> {
        let width = width.resolve(self.default_size);
        let height = height.resolve(self.default_size);
        self.on_size_changed(width, height)?;
        Ok((width, height))
    }

    /// The widget was resized to `width` x `height` physical pixels.
    ///
    /// Non-finite or negative sizes are rejected and the previous size kept.
    pub fn on_size_changed(&mut self, width: f32, height: f32) -> Result<(), ProgressError> {
        let width = validate_size("width", width)?;
        let height = validate_size("height", height)?;
        if self.size == Some((width, height)) {
            return Ok(());
        }
        self.size = Some((width, height));
        self.update_draw_rect();
        self.invalidate();
        Ok(())
    }

    /// Square the arcs are drawn in, once the widget has a size.
    pub fn draw_rect(&self) -> Option<DrawRect> {
        self.draw_rect
    }

    /// Angle each cap of the foreground stroke extends past the arc.
    pub fn foreground_stroke_cap_angle(&self) -> f32 {
        self.cap_angle
    }

    // Frames.

    /// Whether a progress transition or the indeterminate animation runs.
    pub fn is_animating(&self) -> bool {
        self.engine.is_running() || self.progress.is_running()
    }

    /// Advances every running animation by `dt`. Returns whether the output
    /// changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut changed = self.progress.advance(dt);
        if self.engine.is_running() {
            self.engine.advance(dt);
            changed = true;
        }
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Advances animations to the frame time `now`.
    ///
    /// Frame times are only tracked while something animates, so the first
    /// frame after an idle period advances by zero.
    pub fn frame(&mut self, now: Instant) -> bool {
        if !self.is_animating() {
            self.last_frame = None;
            return false;
        }
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.advance(dt)
    }

    /// Returns and clears the redraw request flag.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::replace(&mut self.invalidated, false)
    }

    /// The foreground arc before stroke-cap compensation.
    pub fn arc_angles(&self) -> ArcAngles {
        if self.indeterminate {
            self.engine.state().angles()
        } else {
            ArcAngles::new(
                self.start_angle,
                progress_sweep(self.progress.value(), self.maximum),
            )
        }
    }

    /// Stroke commands for the current frame.
    ///
    /// Empty until the widget has a positive size.
    pub fn draw(&self) -> FrameCommands {
        let mut commands = FrameCommands::new();
        let Some(rect) = self.draw_rect else {
            return commands;
        };
        if self.draw_background_stroke && self.background.color.a > 0.0 {
            commands.push(ArcCommand {
                rect,
                color: self.background.color,
                stroke_width_px: self.background.width,
                start_angle_degrees: 0.0,
                sweep_angle_degrees: FULL_CIRCLE,
                cap: self.background.cap,
            });
        }
        let angles = apply_cap_compensation(self.arc_angles(), self.cap_angle);
        if self.foreground.color.a > 0.0 && angles.sweep != 0.0 {
            commands.push(ArcCommand {
                rect,
                color: self.foreground.color,
                stroke_width_px: self.foreground.width,
                start_angle_degrees: angles.start,
                sweep_angle_degrees: angles.sweep,
                cap: self.foreground.cap,
            });
        }
        trace!(count = commands.len(), ?angles, "drew progress frame");
        commands
    }

    fn is_live(&self) -> bool {
        self.attached && self.visible
    }

    fn sync_engine(&mut self) {
        if self.indeterminate && self.is_live() {
            self.engine.start();
        } else {
            self.engine.stop();
        }
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    fn update_draw_rect(&mut self) {
        let thickness = if self.draw_background_stroke {
            self.foreground.width.max(self.background.width)
        } else {
            self.foreground.width
        };
        self.draw_rect = self
            .size
            .and_then(|(width, height)| DrawRect::inscribed(width, height, thickness));
        self.update_cap_angle();
    }

    fn update_cap_angle(&mut self) {
        self.cap_angle = self.draw_rect.map_or(0.0, |rect| {
            compute_cap_angle(self.foreground.cap, self.foreground.width, rect.radius())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn live_bar(args: CircularProgressArgs) -> CircularProgressBar {
        let mut bar = CircularProgressBar::new(args).unwrap();
        bar.on_attached();
        bar.on_size_changed(100.0, 100.0).unwrap();
        bar
    }

    #[test]
    fn test_half_progress_from_twelve_o_clock() {
        let bar = live_bar(CircularProgressArgs::default().progress(50.0));
        let commands = bar.draw();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].start_angle_degrees, 270.0);
        assert_eq!(commands[0].sweep_angle_degrees, 180.0);
    }

    #[test]
    fn test_overflow_draws_full_circle() {
        let mut bar = live_bar(
            CircularProgressArgs::default()
                .animate_progress(false)
                .foreground_stroke_cap(StrokeCap::Round),
        );
        bar.set_progress(150.0).unwrap();
        let commands = bar.draw();
        // Full circles are not compensated for caps.
        assert_eq!(commands[0].start_angle_degrees, 270.0);
        assert_eq!(commands[0].sweep_angle_degrees, 360.0);
    }

    #[test]
    fn test_progress_change_is_animated_while_live() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(100.0).unwrap();
        assert_eq!(bar.progress(), 100.0);
        assert_eq!(bar.displayed_progress(), 0.0);
        assert!(bar.is_animating());

        bar.advance(ms(50));
        assert_eq!(bar.displayed_progress(), 75.0);
        bar.advance(ms(50));
        assert_eq!(bar.displayed_progress(), 100.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_progress_change_is_immediate_when_detached() {
        let mut bar = CircularProgressBar::new(CircularProgressArgs::default()).unwrap();
        bar.set_progress(40.0).unwrap();
        assert_eq!(bar.displayed_progress(), 40.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_last_progress_write_wins() {
        let mut bar =
            live_bar(CircularProgressArgs::default().progress_animation_easing(Easing::Linear));
        bar.set_progress(100.0).unwrap();
        bar.advance(ms(50));
        bar.set_progress(10.0).unwrap();
        assert_eq!(bar.progress(), 10.0);
        bar.advance(ms(100));
        assert_eq!(bar.displayed_progress(), 10.0);
    }

    #[test]
    fn test_hiding_finishes_transition() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(60.0).unwrap();
        bar.on_visibility_changed(false);
        assert_eq!(bar.displayed_progress(), 60.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_zero_maximum_rejected_and_state_kept() {
        let mut bar = live_bar(CircularProgressArgs::default());
        assert_eq!(bar.set_maximum(0.0), Err(ProgressError::ZeroMaximum));
        assert_eq!(bar.maximum(), 100.0);
        assert!(bar.set_start_angle(-361.0).is_err());
        assert_eq!(bar.start_angle(), 270.0);
        assert!(bar.set_foreground_stroke_width(-1.0).is_err());
        assert!(bar.set_progress(f32::INFINITY).is_err());
    }

    #[test]
    fn test_indeterminate_runs_only_when_live() {
        let mut bar = CircularProgressBar::new(CircularProgressArgs::default().indeterminate(true))
            .unwrap();
        assert!(!bar.is_animating());

        bar.on_attached();
        assert!(bar.is_animating());

        bar.on_visibility_changed(false);
        assert!(!bar.is_animating());
        bar.on_visibility_changed(true);
        assert!(bar.is_animating());

        bar.on_detached();
        assert!(!bar.is_animating());
        assert!(!bar.advance(ms(100)));
    }

    #[test]
    fn test_indeterminate_sweep_within_bounds() {
        let mut bar = live_bar(
            CircularProgressArgs::default()
                .indeterminate(true)
                .indeterminate_minimum_angle(30.0),
        );
        for _ in 0..400 {
            assert!(bar.advance(ms(16)));
            let angles = bar.arc_angles();
            assert!(angles.sweep >= 30.0 - EPSILON);
            assert!(angles.sweep <= 330.0 + EPSILON);
        }
    }

    #[test]
    fn test_leaving_indeterminate_resets_baseline() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.advance(ms(250));
        assert!(bar.indeterminate_state().rotation_angle > 0.0);

        bar.set_indeterminate(false);
        let state = bar.indeterminate_state();
        assert_eq!(state.rotation_angle, 0.0);
        assert_eq!(state.sweep_angle, 0.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_minimum_angle_change_while_running() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.advance(ms(700));
        assert!(bar.set_indeterminate_minimum_angle(190.0).is_err());
        bar.set_indeterminate_minimum_angle(20.0).unwrap();
        assert!(bar.is_animating());
        let state = bar.indeterminate_state();
        assert_eq!(state.minimum_angle, 20.0);
        assert_eq!(state.offset_angle, 0.0);
    }

    #[test]
    fn test_round_cap_compensation_applied() {
        // 100px widget, 10px stroke: radius (100 - 2 * 6) / 2 = 44.
        let mut bar = live_bar(
            CircularProgressArgs::default()
                .progress(50.0)
                .start_angle(0.0)
                .foreground_stroke_cap(StrokeCap::Round),
        );
        bar.set_foreground_stroke_width(10.0).unwrap();
        let cap_angle = 90.0 * 10.0 / (std::f32::consts::PI * 44.0);
        assert!((bar.foreground_stroke_cap_angle() - cap_angle).abs() < EPSILON);

        let arc = bar.draw()[0];
        assert!((arc.start_angle_degrees - cap_angle).abs() < EPSILON);
        assert!((arc.sweep_angle_degrees - (180.0 - 2.0 * cap_angle)).abs() < EPSILON);

        bar.set_foreground_stroke_cap(StrokeCap::Butt);
        assert_eq!(bar.foreground_stroke_cap_angle(), 0.0);
    }

    #[test]
    fn test_background_stroke_sizes_draw_rect() {
        let mut bar = live_bar(CircularProgressArgs::default().progress(25.0));
        bar.set_background_stroke_width(8.0).unwrap();
        assert_eq!(bar.draw_rect().unwrap().left, 1.0 + 1.5);

        bar.set_draw_background_stroke(true);
        let rect = bar.draw_rect().unwrap();
        assert_eq!(rect.left, 1.0 + 4.0);

        let commands = bar.draw();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].sweep_angle_degrees, 360.0);
        assert_eq!(commands[0].cap, StrokeCap::Butt);
        assert_eq!(commands[1].sweep_angle_degrees, 90.0);
    }

    #[test]
    fn test_measure_uses_default_size() {
        let mut bar = CircularProgressBar::new(CircularProgressArgs::default().scale_factor(2.0))
            .unwrap();
        assert!(bar.draw().is_empty());
        let size = bar
            .measure(SizeConstraint::Unspecified, SizeConstraint::AtMost(60.0))
            .unwrap();
        assert_eq!(size, (96.0, 60.0));
        let rect = bar.draw_rect().unwrap();
        assert_eq!(rect.width(), rect.height());
        assert_eq!(bar.foreground_stroke_width(), 6.0);
    }

    #[test]
    fn test_invalidation_flag() {
        let mut bar = live_bar(CircularProgressArgs::default());
        assert!(bar.take_invalidated());
        assert!(!bar.take_invalidated());
        bar.set_foreground_stroke_color(Color::WHITE);
        assert!(bar.take_invalidated());
        assert!(!bar.advance(ms(16)));
        assert!(!bar.take_invalidated());
    }

    #[test]
    fn test_frame_tracks_elapsed_time() {
        let mut bar =
            live_bar(CircularProgressArgs::default().progress_animation_easing(Easing::Linear));
        let start = Instant::now();
        assert!(!bar.frame(start));

        bar.set_progress(100.0).unwrap();
        bar.frame(start + ms(1000));
        assert_eq!(bar.displayed_progress(), 0.0);
        bar.frame(start + ms(1050));
        assert_eq!(bar.displayed_progress(), 50.0);
    }

    #[test]
    fn test_entering_indeterminate_finishes_transition() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(80.0).unwrap();
        bar.advance(ms(20));
        bar.set_indeterminate(true);
        assert_eq!(bar.displayed_progress(), 80.0);
        assert!(bar.is_animating());
    }

    #[test]
    fn test_progress_in_indeterminate_mode_is_stored() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.set_progress(25.0).unwrap();
        assert_eq!(bar.progress(), 25.0);
        assert_eq!(bar.displayed_progress(), 25.0);

        bar.set_indeterminate(false);
        assert!(!bar.is_animating());
        assert_eq!(bar.arc_angles().sweep, 90.0);
    }

    #[test]
    fn test_duration_change_finishes_transition() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(100.0).unwrap();
        bar.advance(ms(20));
        bar.set_progress_animation_duration(ms(500));
        assert_eq!(bar.displayed_progress(), 100.0);
        assert!(!bar.is_animating());

        bar.set_progress(0.0).unwrap();
        bar.advance(ms(250));
        assert_eq!(bar.displayed_progress(), 25.0);
    }

    #[test]
    fn test_easing_change_finishes_transition() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(100.0).unwrap();
        bar.advance(ms(20));
        bar.set_progress_animation_easing(Easing::Linear).unwrap();
        assert_eq!(bar.displayed_progress(), 100.0);
        assert!(!bar.is_animating());
        assert_eq!(bar.progress_animation_easing(), Easing::Linear);
    }

    #[test]
    fn test_detach_finishes_transition() {
        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(100.0).unwrap();
        bar.advance(ms(20));
        bar.on_detached();
        assert_eq!(bar.displayed_progress(), 100.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_redundant_indeterminate_switch_keeps_rotation() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.advance(ms(300));
        let before = bar.indeterminate_state();
        assert_eq!(before.rotation_angle, 90.0);

        bar.set_indeterminate(true);
        assert_eq!(bar.indeterminate_state(), before);
        assert!(bar.is_animating());
    }

    #[test]
    fn test_reattach_after_hide_restarts_animation() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.on_visibility_changed(false);
        bar.on_detached();
        assert!(!bar.is_visible());

        bar.on_attached();
        assert!(bar.is_visible());
        assert!(bar.is_animating());
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut bar = live_bar(CircularProgressArgs::default().progress(50.0));
        let rect = bar.draw_rect();

        assert!(matches!(
            bar.on_size_changed(f32::NAN, 100.0),
            Err(ProgressError::NonFinite { field: "width", .. })
        ));
        assert!(matches!(
            bar.measure(SizeConstraint::Exact(100.0), SizeConstraint::Exact(f32::INFINITY)),
            Err(ProgressError::NonFinite { field: "height", .. })
        ));
        assert_eq!(
            bar.on_size_changed(-5.0, 10.0),
            Err(ProgressError::NegativeSize(-5.0))
        );
        assert_eq!(bar.draw_rect(), rect);
        let commands = bar.draw();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].rect.right.is_finite());

        bar.on_size_changed(0.0, 100.0).unwrap();
        assert!(bar.draw().is_empty());
    }

    #[test]
    fn test_huge_step_does_not_panic() {
        let mut bar = live_bar(CircularProgressArgs::default().indeterminate(true));
        bar.advance(ms(16));
        assert!(bar.advance(Duration::MAX));
        let arc = bar.draw()[0];
        assert!(arc.start_angle_degrees.is_finite());
        assert!(arc.sweep_angle_degrees >= 60.0 - EPSILON);

        let mut bar = live_bar(CircularProgressArgs::default());
        bar.set_progress(100.0).unwrap();
        bar.advance(Duration::MAX);
        assert_eq!(bar.displayed_progress(), 100.0);
    }
}
