//! Angle computation and animation for circular progress indicators.
//!
//! This crate does not draw anything. Each frame it produces the start and
//! sweep angles of the foreground arc, either from a determinate
//! progress/maximum ratio or from a rotating, pulsing indeterminate animation,
//! and hands them to the host as stroke commands.
//!
//! # Components
//!
//! - [`resolve_progress_angles`] turns `(progress, maximum, start_angle)` into
//!   an arc, saturating at a full circle.
//! - [`IndeterminateEngine`] runs the indeterminate animation and
//!   [`compose_indeterminate_angles`] turns its state into an arc.
//! - [`compute_cap_angle`] and [`apply_cap_compensation`] keep round and
//!   square stroke caps from making the arc look longer than it is.
//! - [`CircularProgressBar`] wires the above to configuration, layout and
//!   lifecycle signals for a host widget.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use circular_progress::{CircularProgressArgs, CircularProgressBar, StrokeCap};
//!
//! let mut bar = CircularProgressBar::new(
//!     CircularProgressArgs::default()
//!         .indeterminate(true)
//!         .foreground_stroke_cap(StrokeCap::Round),
//! )?;
//! bar.on_attached();
//! bar.on_size_changed(96.0, 96.0)?;
//!
//! for _ in 0..60 {
//!     bar.advance(Duration::from_millis(16));
//!     for command in bar.draw() {
//!         // Hand `command` to the renderer.
//!         assert!(command.sweep_angle_degrees > 0.0);
//!     }
//! }
//! # Ok::<(), circular_progress::ProgressError>(())
//! ```

pub mod angles;
pub mod args;
pub mod color;
pub mod command;
pub mod dp;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod indeterminate;
pub mod oscillator;
pub mod progress_bar;
pub mod shared;
pub mod stroke_cap;
pub mod transition;

pub use angles::{ArcAngles, FULL_CIRCLE, resolve_progress_angles};
pub use args::{CircularProgressArgs, CircularProgressDefaults};
pub use color::Color;
pub use command::ArcCommand;
pub use dp::Dp;
pub use easing::Easing;
pub use error::ProgressError;
pub use geometry::{DrawRect, SizeConstraint};
pub use indeterminate::{
    IndeterminateConfig, IndeterminateEngine, IndeterminateState, compose_indeterminate_angles,
};
pub use progress_bar::{CircularProgressBar, FrameCommands};
pub use shared::SharedProgressBar;
pub use stroke_cap::{StrokeCap, apply_cap_compensation, compute_cap_angle};
pub use transition::ProgressTransition;
