//! Text rendering of arc commands.

use circular_progress::ArcCommand;

/// Number of cells in the gauge; each covers `360 / CELLS` degrees.
pub const CELLS: usize = 36;

/// Renders the arc as a ring unrolled into a line starting at 0°.
pub fn render(command: &ArcCommand) -> String {
    let cell_angle = 360.0 / CELLS as f32;
    (0..CELLS)
        .map(|cell| {
            let angle = (cell as f32 + 0.5) * cell_angle;
            if covers(command, angle) { '#' } else { '.' }
        })
        .collect()
}

fn covers(command: &ArcCommand, angle: f32) -> bool {
    let sweep = command.sweep_angle_degrees;
    if command.is_full_circle() {
        return true;
    }
    let start = command.start_angle_degrees;
    if sweep >= 0.0 {
        (angle - start).rem_euclid(360.0) < sweep
    } else {
        (start - angle).rem_euclid(360.0) < -sweep
    }
}
