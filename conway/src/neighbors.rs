// neighbors.rs - Moore-neighborhood counting under a boundary mode

use crate::boundary::{AxisResolver, Boundary};

/// Neighbor evaluator with the boundary dispatch already resolved.
///
/// Build one per step, not per cell.
#[derive(Clone, Copy)]
pub(crate) struct Neighborhood {
    resolve: AxisResolver,
    off_grid: u8,
}

impl Neighborhood {
    pub(crate) fn new(boundary: Boundary) -> Self {
        Self {
            resolve: boundary.axis_resolver(),
            off_grid: boundary.off_grid_value(),
        }
    }

    /// Live neighbors of `(x, y)`, exact only up to 3.
    ///
    /// Counting stops as soon as the total exceeds 3. Any return value of 4
    /// or more only means "more than three"; the transition rule needs
    /// nothing finer, and no other caller may rely on the exact figure.
    pub(crate) fn count(&self, cells: &[u8], width: u16, height: u16, x: u16, y: u16) -> u8 {
        let (w, h) = (i32::from(width), i32::from(height));
        let (x, y) = (i32::from(x), i32::from(y));
        let row_len = usize::from(width);

        let mut n = 0u8;
        for dy in -1..=1 {
            let row = (self.resolve)(y + dy, h);
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let live = match (row, (self.resolve)(x + dx, w)) {
                    (Some(ny), Some(nx)) => cells[ny as usize * row_len + nx as usize],
                    _ => self.off_grid,
                };
                n += live;
                if n > 3 {
                    return n;
                }
            }
        }
        n
    }
}

/// Live neighbors of `(x, y)` in a row-major `width x height` buffer.
///
/// Same early-exit contract as the stepper: a result of 4 or more means
/// "more than three", nothing else.
pub fn live_neighbors(
    cells: &[u8],
    width: u16,
    height: u16,
    x: u16,
    y: u16,
    boundary: Boundary,
) -> u8 {
    Neighborhood::new(boundary).count(cells, width, height, x, y)
}
