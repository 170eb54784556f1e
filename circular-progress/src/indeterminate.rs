//! Indeterminate "chasing arc" animation.
//!
//! Two oscillators drive the arc: a linear rotation that repeats forever and a
//! sweep ramp from `0` to `360 - 2 * minimum_angle`. Every time the sweep ramp
//! finishes, the engine flips between grow and shrink mode, and on entering
//! grow mode advances the offset by `2 * minimum_angle`. The composed arc
//! alternately lengthens from a `minimum_angle` seed and shortens back down
//! while the whole assembly keeps rotating, and its endpoints stay continuous
//! across every half-cycle boundary.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    angles::{ArcAngles, FULL_CIRCLE},
    easing::Easing,
    error::{ProgressError, ensure_finite},
    oscillator::{Oscillator, RepeatMode, Tick},
};

/// Timing and shape parameters of the indeterminate animation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndeterminateConfig {
    /// Shortest visible arc, in degrees. Valid range is `0..=180`.
    pub minimum_angle: f32,
    /// Time for one full 360° rotation.
    pub rotation_duration: Duration,
    pub rotation_easing: Easing,
    /// Time for one grow or shrink half-cycle.
    pub sweep_duration: Duration,
    pub sweep_easing: Easing,
}

impl IndeterminateConfig {
    pub const DEFAULT_MINIMUM_ANGLE: f32 = 60.0;
    pub const DEFAULT_ROTATION_DURATION: Duration = Duration::from_millis(1200);
    pub const DEFAULT_SWEEP_DURATION: Duration = Duration::from_millis(600);

    /// Checks every parameter, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self, ProgressError> {
        let minimum_angle = ensure_finite("indeterminate minimum angle", self.minimum_angle)?;
        if !(0.0..=180.0).contains(&minimum_angle) {
            return Err(ProgressError::MinimumAngleOutOfRange(minimum_angle));
        }
        self.rotation_easing.validate()?;
        self.sweep_easing.validate()?;
        Ok(self)
    }

    /// Upper end of the sweep ramp.
    pub fn sweep_target(&self) -> f32 {
        FULL_CIRCLE - self.minimum_angle * 2.0
    }
}

impl Default for IndeterminateConfig {
    fn default() -> Self {
        Self {
            minimum_angle: Self::DEFAULT_MINIMUM_ANGLE,
            rotation_duration: Self::DEFAULT_ROTATION_DURATION,
            rotation_easing: Easing::Linear,
            sweep_duration: Self::DEFAULT_SWEEP_DURATION,
            sweep_easing: Easing::DECELERATE,
        }
    }
}

/// Snapshot of the animation, read by the renderer once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndeterminateState {
    pub rotation_angle: f32,
    pub sweep_angle: f32,
    pub offset_angle: f32,
    pub grow_mode: bool,
    pub minimum_angle: f32,
}

impl IndeterminateState {
    /// The arc to draw for this snapshot.
    pub fn angles(&self) -> ArcAngles {
        compose_indeterminate_angles(self)
    }
}

/// Composes the visible arc from an animation snapshot.
///
/// In grow mode the arc's tail is pinned to the rotation and its head extends
/// by the sweep; in shrink mode the tail catches up with the head. The
/// resulting sweep always lies in `minimum_angle..=360 - minimum_angle`.
pub fn compose_indeterminate_angles(state: &IndeterminateState) -> ArcAngles {
    if state.grow_mode {
        ArcAngles::new(
            state.rotation_angle - state.offset_angle,
            state.sweep_angle + state.minimum_angle,
        )
    } else {
        ArcAngles::new(
            state.rotation_angle + state.sweep_angle - state.offset_angle,
            FULL_CIRCLE - state.sweep_angle - state.minimum_angle,
        )
    }
}

/// Owns the oscillators and animation state of an indeterminate indicator.
#[derive(Debug, Clone)]
pub struct IndeterminateEngine {
    config: IndeterminateConfig,
    state: IndeterminateState,
    rotation: Oscillator,
    sweep: Oscillator,
}

impl IndeterminateEngine {
    /// Creates a stopped engine.
    pub fn new(config: IndeterminateConfig) -> Result<Self, ProgressError> {
        let config = config.validate()?;
        Ok(Self {
            rotation: Oscillator::new(
                0.0,
                FULL_CIRCLE,
                config.rotation_duration,
                config.rotation_easing,
                RepeatMode::Restart,
            ),
            sweep: Oscillator::new(
                0.0,
                config.sweep_target(),
                config.sweep_duration,
                config.sweep_easing,
                RepeatMode::Once,
            ),
            state: IndeterminateState {
                minimum_angle: config.minimum_angle,
                ..Default::default()
            },
            config,
        })
    }

    pub fn config(&self) -> &IndeterminateConfig {
        &self.config
    }

    pub fn state(&self) -> IndeterminateState {
        self.state
    }

    /// Whether any oscillator is currently running.
    pub fn is_running(&self) -> bool {
        self.rotation.is_running() || self.sweep.is_running()
    }

    /// Starts whichever oscillators are not already running.
    pub fn start(&mut self) {
        if self.rotation.is_running() && self.sweep.is_running() {
            trace!("indeterminate animation already running");
            return;
        }
        debug!(
            grow_mode = self.state.grow_mode,
            offset = self.state.offset_angle,
            "starting indeterminate animation"
        );
        if !self.rotation.is_running() {
            self.rotation.start();
        }
        if !self.sweep.is_running() {
            self.sweep.start();
        }
    }

    /// Cancels both oscillators and returns the arc to its neutral baseline.
    ///
    /// The grow/shrink phase and the accumulated offset are kept, so a later
    /// `start` resumes the cycle. Returns whether anything was running.
    pub fn stop(&mut self) -> bool {
        let rotation = self.rotation.cancel();
        let sweep = self.sweep.cancel();
        if !(rotation || sweep) {
            trace!("indeterminate animation already stopped");
            return false;
        }
        debug!("stopping indeterminate animation");
        self.state.rotation_angle = 0.0;
        self.state.sweep_angle = 0.0;
        true
    }

    /// Stops the animation and clears the cycle phase.
    pub fn reset(&mut self) {
        self.stop();
        self.state = IndeterminateState {
            minimum_angle: self.config.minimum_angle,
            ..Default::default()
        };
    }

    /// Applies new parameters.
    ///
    /// Changing the minimum angle restarts the animation from a clean baseline,
    /// since the sweep ramp's end value depends on it. Changing durations or
    /// easing curves restarts both oscillators. A running engine keeps running.
    pub fn reconfigure(&mut self, config: IndeterminateConfig) -> Result<(), ProgressError> {
        let config = config.validate()?;
        if config == self.config {
            return Ok(());
        }
        let was_running = self.is_running();
        let minimum_changed = config.minimum_angle != self.config.minimum_angle;
        debug!(?config, minimum_changed, "reconfiguring indeterminate animation");

        self.config = config;
        self.rotation.set_duration(config.rotation_duration);
        self.rotation.set_easing(config.rotation_easing);
        self.sweep.set_values(0.0, config.sweep_target());
        self.sweep.set_duration(config.sweep_duration);
        self.sweep.set_easing(config.sweep_easing);
        if minimum_changed {
            self.reset();
        } else {
            self.stop();
        }
        if was_running {
            self.start();
        }
        Ok(())
    }

    /// Advances both oscillators by `dt` and returns the new snapshot.
    ///
    /// A sweep completion toggles the grow/shrink mode and restarts the ramp
    /// inside this call; time left over after the completion carries into the
    /// restarted ramp. Does nothing while stopped.
    pub fn advance(&mut self, dt: Duration) -> IndeterminateState {
        if !self.is_running() {
            return self.state;
        }
        if let Tick::Running(rotation) = self.rotation.advance(dt) {
            self.state.rotation_angle = rotation;
        }

        let mut remaining = dt;
        loop {
            match self.sweep.advance(remaining) {
                Tick::Idle => break,
                Tick::Running(sweep) => {
                    self.state.sweep_angle = sweep;
                    break;
                }
                Tick::Completed { overshoot, .. } => {
                    self.complete_half_cycle();
                    remaining = self.skip_full_cycles(overshoot);
                    self.sweep.start();
                    self.state.sweep_angle = self.sweep.value();
                    if remaining.is_zero() || self.sweep.duration().is_zero() {
                        break;
                    }
                }
            }
        }
        self.state
    }

    fn complete_half_cycle(&mut self) {
        self.state.grow_mode = !self.state.grow_mode;
        if self.state.grow_mode {
            self.state.offset_angle =
                (self.state.offset_angle + self.config.minimum_angle * 2.0) % FULL_CIRCLE;
        }
        trace!(
            grow_mode = self.state.grow_mode,
            offset = self.state.offset_angle,
            "indeterminate half-cycle complete"
        );
    }

    /// Applies every whole grow+shrink cycle contained in `overshoot` at once.
    /// Each such cycle toggles the mode twice and adds `2 * minimum_angle` to
    /// the offset once.
    fn skip_full_cycles(&mut self, overshoot: Duration) -> Duration {
        let cycle = self.config.sweep_duration.as_nanos() * 2;
        if cycle == 0 {
            return overshoot;
        }
        let overshoot_nanos = overshoot.as_nanos();
        let cycles = overshoot_nanos / cycle;
        if cycles == 0 {
            return overshoot;
        }
        let advance = (cycles as f64 * self.config.minimum_angle as f64 * 2.0)
            % FULL_CIRCLE as f64;
        self.state.offset_angle = (self.state.offset_angle + advance as f32) % FULL_CIRCLE;
        Duration::from_nanos((overshoot_nanos % cycle) as u64)
    }
}
