//! Time-driven value ramps.
//!
//! An [`Oscillator`] interpolates between two values over a duration with an
//! [`Easing`] curve. It is advanced explicitly by the caller with elapsed
//! time, so it never fires callbacks on its own: once cancelled, further
//! `advance` calls leave it untouched.

use std::time::Duration;

use crate::easing::Easing;

/// What happens when an oscillator reaches the end of its ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop at the end value and report completion.
    Once,
    /// Restart from the start value forever.
    Restart,
}

/// Result of advancing an oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// The oscillator is not running.
    Idle,
    /// The ramp is in progress with the given value.
    Running(f32),
    /// A [`RepeatMode::Once`] ramp reached its end value during this step.
    /// `overshoot` is the part of the step left over after completion.
    Completed { value: f32, overshoot: Duration },
}

/// A ramp from `from` to `to` over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    repeat: RepeatMode,
    elapsed: Duration,
    running: bool,
}

impl Oscillator {
    /// Creates a stopped oscillator.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing, repeat: RepeatMode) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            repeat,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Changes the end points. Takes effect on the next `start`.
    pub fn set_values(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Starts (or restarts) the ramp from its start value.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stops the ramp where it is. Returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Current value of the ramp.
    pub fn value(&self) -> f32 {
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64) as f32
        };
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }

    /// Advances the ramp by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        match self.repeat {
            RepeatMode::Restart => {
                if self.duration.is_zero() {
                    self.elapsed = Duration::ZERO;
                    return Tick::Running(self.to);
                }
                let total = self.elapsed.saturating_add(dt);
                let nanos = total.as_nanos() % self.duration.as_nanos();
                self.elapsed = Duration::from_nanos(nanos as u64);
                Tick::Running(self.value())
            }
            RepeatMode::Once => {
                let total = self.elapsed.saturating_add(dt);
                if total >= self.duration {
                    self.elapsed = self.duration;
                    self.running = false;
                    Tick::Completed {
                        value: self.to,
                        overshoot: total - self.duration,
                    }
                } else {
                    self.elapsed = total;
                    Tick::Running(self.value())
                }
            }
        }
    }
}
