//! Animated determinate progress changes.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    easing::Easing,
    oscillator::{Oscillator, RepeatMode, Tick},
};

/// Eased interpolation of the displayed progress value.
///
/// Only the most recent target matters: retargeting while a transition is in
/// flight starts a new one from the currently displayed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTransition {
    ramp: Oscillator,
    value: f32,
}

impl ProgressTransition {
    pub fn new(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            ramp: Oscillator::new(value, value, duration, easing, RepeatMode::Once),
            value,
        }
    }

    /// The progress value to display this frame.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value the transition is heading to.
    pub fn target(&self) -> f32 {
        if self.ramp.is_running() {
            self.ramp.target()
        } else {
            self.value
        }
    }

    pub fn is_running(&self) -> bool {
        self.ramp.is_running()
    }

    pub fn duration(&self) -> Duration {
        self.ramp.duration()
    }

    pub fn easing(&self) -> Easing {
        self.ramp.easing()
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.ramp.set_duration(duration);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.ramp.set_easing(easing);
    }

    /// Starts interpolating from the displayed value to `target`.
    pub fn animate_to(&mut self, target: f32) {
        debug!(from = self.value, to = target, "starting progress transition");
        self.ramp.set_values(self.value, target);
        self.ramp.start();
    }

    /// Cancels any transition and displays `value` immediately.
    pub fn snap_to(&mut self, value: f32) {
        self.ramp.cancel();
        self.value = value;
    }

    /// Finishes an in-flight transition by jumping to its target.
    pub fn end(&mut self) {
        if self.ramp.is_running() {
            let target = self.ramp.target();
            trace!(to = target, "ending progress transition early");
            self.ramp.cancel();
            self.value = target;
        }
    }

    /// Advances the transition. Returns whether the displayed value changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let next = match self.ramp.advance(dt) {
            Tick::Idle => return false,
            Tick::Running(value) => value,
            Tick::Completed { value, .. } => {
                trace!(value, "progress transition finished");
                value
            }
        };
        let changed = next != self.value;
        self.value = next;
        changed
    }
}
