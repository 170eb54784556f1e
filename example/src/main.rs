use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use circular_progress::{
    CircularProgressArgs, CircularProgressBar, SharedProgressBar, SizeConstraint, StrokeCap,
};
use clap::{Parser, ValueEnum};
use tracing::info;

mod gauge;

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Drive a circular progress indicator and print its frames", long_about = None)]
struct Cli {
    /// Run the indeterminate animation instead of filling up progress
    #[arg(short, long)]
    indeterminate: bool,
    /// Value at which the arc becomes a full circle
    #[arg(long, default_value_t = 100.0)]
    maximum: f32,
    /// Progress step applied every `--step-ms` in determinate mode
    #[arg(long, default_value_t = 12.5)]
    step: f32,
    /// Interval between progress steps
    #[arg(long, default_value_t = 250)]
    step_ms: u64,
    /// Shortest indeterminate arc, in degrees
    #[arg(long, default_value_t = 60.0)]
    minimum_angle: f32,
    /// Stroke cap of the foreground arc
    #[arg(long, value_enum, default_value_t = Cap::Round)]
    cap: Cap,
    /// Widget size in physical pixels
    #[arg(long, default_value_t = 96.0)]
    size: f32,
    /// Frames per second of the simulated host
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Total simulated time
    #[arg(long, default_value_t = 2400)]
    duration_ms: u64,
    /// Print every n-th frame
    #[arg(long, default_value_t = 6)]
    every: u32,
    /// Sleep between frames instead of simulating time
    #[arg(long)]
    realtime: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Cap {
    Butt,
    Round,
    Square,
}

impl From<Cap> for StrokeCap {
    fn from(cap: Cap) -> Self {
        match cap {
            Cap::Butt => StrokeCap::Butt,
            Cap::Round => StrokeCap::Round,
            Cap::Square => StrokeCap::Square,
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let args = CircularProgressArgs::default()
        .indeterminate(cli.indeterminate)
        .maximum(cli.maximum)
        .indeterminate_minimum_angle(cli.minimum_angle)
        .foreground_stroke_cap(cli.cap.into())
        .draw_background_stroke(true);
    let bar = SharedProgressBar::new(CircularProgressBar::new(args)?);
    bar.with_mut(|bar| {
        bar.on_attached();
        bar.measure(
            SizeConstraint::Exact(cli.size),
            SizeConstraint::Exact(cli.size),
        )
    })?;
    info!(
        indeterminate = cli.indeterminate,
        fps = cli.fps,
        "starting simulated host"
    );

    let frame_time = Duration::from_secs(1) / cli.fps.max(1);
    let step_time = Duration::from_millis(cli.step_ms.max(1));
    let total = Duration::from_millis(cli.duration_ms);
    let origin = Instant::now();
    let mut elapsed = Duration::ZERO;
    let mut next_step = step_time;
    let mut frame = 0u32;

    while elapsed <= total {
        if !cli.indeterminate && elapsed >= next_step {
            next_step += step_time;
            bar.with_mut(|bar| {
                let next = (bar.progress() + cli.step).min(bar.maximum());
                bar.set_progress(next)
            })?;
        }

        let now = if cli.realtime {
            Instant::now()
        } else {
            origin + elapsed
        };
        let commands = bar.advance_and_draw(now);
        if frame % cli.every.max(1) == 0
            && let Some(arc) = commands.last()
        {
            println!(
                "{:>6}ms  start {:>8.2}  sweep {:>8.2}  [{}]",
                elapsed.as_millis(),
                arc.start_angle_degrees,
                arc.sweep_angle_degrees,
                gauge::render(arc)
            );
        }

        frame += 1;
        elapsed += frame_time;
        if cli.realtime {
            thread::sleep(frame_time);
        }
    }

    bar.with_mut(|bar| bar.on_detached());
    info!(frames = frame, "host detached");
    Ok(())
}
