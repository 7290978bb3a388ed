//! Console replay of a path, one boxed grid per frame.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::board::BoardState;
use crate::error::{PathTreeError, Result};

/// Text of a single frame: a step header and the boxed grid.
pub fn render_frame(step: usize, total: usize, state: &BoardState) -> String {
    format!("Step {}/{}\n{}", step, total, state.boxed())
}

/// Clear the screen and draw each state in turn, waiting `delay` in between.
pub fn animate<W: Write>(out: &mut W, path: &[BoardState], delay: Duration) -> Result<()> {
    let total = path.len();

    for (i, state) in path.iter().enumerate() {
        if i > 0 {
            thread::sleep(delay);
        }

        queue!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(PathTreeError::Output)?;
        out.write_all(render_frame(i + 1, total, state).as_bytes())
            .map_err(PathTreeError::Output)?;
        out.flush().map_err(PathTreeError::Output)?;

        tracing::trace!(step = i + 1, total, "Drew frame");
    }

    Ok(())
}
