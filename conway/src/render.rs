// render.rs - Text views of a world: scaled terminal frames and exact dumps

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{LifeError, Result};
use crate::world::{DEAD, World};

pub const LIVE_CHAR: char = '*';
pub const DEAD_CHAR: char = '.';

/// Moves the cursor to the top-left corner without clearing.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Clears the whole screen, then homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A generation header followed by the grid downsampled by `scale`.
///
/// Each output cell covers a `scale x scale` block (clipped at the grid edge)
/// and is live if any cell in the block is. A scale of 0 is treated as 1.
pub fn frame(world: &World, scale: u16) -> String {
    let scale = usize::from(scale.max(1));
    let (w, h) = (usize::from(world.width()), usize::from(world.height()));
    let (cols, rows) = (w.div_ceil(scale), h.div_ceil(scale));
    let cells = world.cells();

    let mut out = format!("Generation: {}\n", world.generation());
    out.reserve(rows * (cols + 1));
    for oy in 0..rows {
        let y0 = oy * scale;
        let y1 = (y0 + scale).min(h);
        for ox in 0..cols {
            let x0 = ox * scale;
            let x1 = (x0 + scale).min(w);
            let live = (y0..y1).any(|y| cells[y * w + x0..y * w + x1].iter().any(|&c| c != DEAD));
            out.push(if live { LIVE_CHAR } else { DEAD_CHAR });
        }
        out.push('\n');
    }
    out
}

/// Writes one frame in a single write so partial frames never interleave.
pub fn draw_frame<W: Write>(out: &mut W, world: &World, scale: u16) -> io::Result<()> {
    let mut buf = String::from(CURSOR_HOME);
    buf.push_str(&frame(world, scale));
    out.write_all(buf.as_bytes())?;
    out.flush()
}

/// Call once before the first frame.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

/// The exact grid, one line per row, no header.
pub fn write_state<W: Write>(out: &mut W, world: &World) -> io::Result<()> {
    let width = usize::from(world.width());
    let mut line = String::with_capacity(width + 1);
    for row in world.cells().chunks(width.max(1)).take(usize::from(world.height())) {
        line.clear();
        line.extend(row.iter().map(|&c| if c != DEAD { LIVE_CHAR } else { DEAD_CHAR }));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    // a zero-width grid still has `height` (empty) lines
    if width == 0 {
        for _ in 0..world.height() {
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}

/// Creates or truncates `path` and writes the exact grid to it.
pub fn save_state(path: impl AsRef<Path>, world: &World) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| LifeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_state(&mut out, world).map_err(write_err)?;
    debug!(
        "saved {}x{} grid at generation {} to {}",
        world.width(),
        world.height(),
        world.generation(),
        path.display()
    );
    Ok(())
}
