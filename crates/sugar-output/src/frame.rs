//! Text rendering of the agent grid.
//!
//! ```text
//!    |007|   |012
//!    |   |   |
//! ----------------
//! ```
//!
//! One line per grid row, cells joined by `|`.  An occupied cell shows the
//! agent id zero-padded to three digits, an empty one three spaces.  A rule
//! of `-` four times the grid width closes the frame.

use std::io;

use sugar_core::Coord;
use sugar_sim::Simulation;

const EMPTY_CELL: &str = "   ";

/// The agent grid of `sim` as a multi-line string, without a trailing
/// newline.
pub fn render_frame(sim: &Simulation) -> String {
    let (width, height) = (sim.width(), sim.height());
    let grid = sim.agent_grid();
    let mut out = String::with_capacity((width as usize * 4 + 1) * (height as usize + 1));

    for y in 0..height {
        for x in 0..width {
            if x > 0 {
                out.push('|');
            }
            match grid.get(Coord::new(x, y)) {
                Some(id) => out.push_str(&format!("{:03}", id.0)),
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }
    out.extend(std::iter::repeat_n('-', width as usize * 4));
    out
}

/// Write [`render_frame`] followed by a newline.
pub fn write_frame<W: io::Write>(out: &mut W, sim: &Simulation) -> io::Result<()> {
    writeln!(out, "{}", render_frame(sim))
}
