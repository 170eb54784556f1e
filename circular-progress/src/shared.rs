//! Cloneable handle for hosts that touch an indicator from several places.

use std::{sync::Arc, time::Instant};

use parking_lot::Mutex;

use crate::progress_bar::{CircularProgressBar, FrameCommands};

/// Shared, lock-protected [`CircularProgressBar`].
///
/// Event handlers can update the configuration through one clone while the
/// frame loop draws through another. Every access holds the lock for its whole
/// duration, so a frame never observes a half-applied update.
#[derive(Clone)]
pub struct SharedProgressBar {
    inner: Arc<Mutex<CircularProgressBar>>,
}

impl SharedProgressBar {
    pub fn new(bar: CircularProgressBar) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bar)),
        }
    }

    /// Reads the indicator under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&CircularProgressBar) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Mutates the indicator under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut CircularProgressBar) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Advances to `now` and produces the frame's commands in one critical
    /// section.
    pub fn advance_and_draw(&self, now: Instant) -> FrameCommands {
        let mut bar = self.inner.lock();
        bar.frame(now);
        bar.draw()
    }
}

impl std::fmt::Debug for SharedProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedProgressBar").finish_non_exhaustive()
    }
}
