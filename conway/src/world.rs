// world.rs - The grid store: dimensions, boundary mode and two cell buffers

use std::collections::TryReserveError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use log::{debug, trace};
use rand::Rng;

use crate::boundary::Boundary;
use crate::error::{LifeError, Result};
use crate::neighbors::Neighborhood;
use crate::pattern::Pattern;
use crate::step::{self, Kernel};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A fixed-size Game of Life grid.
///
/// Cells are bytes (0 dead, 1 alive) stored row-major, `index = y * width + x`.
/// `next` is scratch for the stepper; after every step it holds the previous
/// generation, because the buffers are swapped rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    width: u16,
    height: u16,
    boundary: Boundary,
    current: Vec<u8>,
    next: Vec<u8>,
    generation: u64,
}

impl World {
    /// Allocates a dead `width x height` world with the `Edge` boundary.
    pub fn create(width: u16, height: u16) -> Result<Self> {
        let len = usize::from(width) * usize::from(height);
        let alloc_err = |source| LifeError::Allocation {
            width,
            height,
            source,
        };
        let current = zeroed(len).map_err(alloc_err)?;
        let next = zeroed(len).map_err(alloc_err)?;
        trace!("created {width}x{height} world ({len} cells per buffer)");

        Ok(Self {
            width,
            height,
            boundary: Boundary::default(),
            current,
            next,
            generation: 0,
        })
    }

    pub fn with_boundary(width: u16, height: u16, boundary: Boundary) -> Result<Self> {
        let mut world = Self::create(width, height)?;
        world.set_boundary(boundary);
        Ok(world)
    }

    /// Releases both buffers.
    pub fn destroy(self) {
        trace!(
            "destroying {}x{} world at generation {}",
            self.width, self.height, self.generation
        );
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total cell count; both factors are 16-bit so this cannot overflow.
    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Takes effect on the next step.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.current
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Off-grid positions read as dead.
    pub fn get(&self, x: u16, y: u16) -> bool {
        self.index(x, y).is_some_and(|i| self.current[i] != DEAD)
    }

    /// Returns false, writing nothing, when `(x, y)` is off-grid.
    pub fn set(&mut self, x: u16, y: u16, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.current[i] = u8::from(alive);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.current.fill(DEAD);
    }

    pub fn population(&self) -> u32 {
        self.current.iter().map(|&c| u32::from(c)).sum()
    }

    /// Sets every cell alive or dead with equal odds. All randomness comes
    /// from `rng`; seed it for a reproducible world.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.current.iter_mut() {
            *cell = u8::from(rng.random::<bool>());
        }
        debug!("randomized world, population {}", self.population());
    }

    /// Live neighbors of `(x, y)` under the active boundary. Exact only up
    /// to 3; any value of 4 or more just means "more than three".
    pub fn live_neighbors(&self, x: u16, y: u16) -> u8 {
        Neighborhood::new(self.boundary).count(&self.current, self.width, self.height, x, y)
    }

    /// Advances one generation using the fastest kernel for the boundary.
    pub fn step(&mut self) {
        self.step_with(Kernel::for_boundary(self.boundary));
    }

    /// Advances one generation with a specific kernel. `TorusFast` under any
    /// other boundary falls back to `Generic`.
    pub fn step_with(&mut self, kernel: Kernel) {
        if self.current.is_empty() {
            trace!("zero-area world, nothing to step");
            return;
        }

        match kernel {
            Kernel::TorusFast if self.boundary == Boundary::Torus => {
                step::torus_fast(&self.current, &mut self.next, self.width, self.height);
            }
            Kernel::TorusFast => {
                debug!("torus kernel requested under {} boundary, using generic", self.boundary);
                step::generic(&self.current, &mut self.next, self.width, self.height, self.boundary);
            }
            Kernel::Generic => {
                step::generic(&self.current, &mut self.next, self.width, self.height, self.boundary);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    pub fn step_n(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Writes `pattern`'s live cells centered on the grid and returns how
    /// many landed on it.
    ///
    /// Cells that fall off the grid are dropped. Existing live cells are
    /// never cleared. An empty pattern is rejected without touching the
    /// world.
    pub fn stamp(&mut self, pattern: &Pattern) -> Result<u32> {
        if pattern.width() == 0 || pattern.height() == 0 {
            return Err(LifeError::EmptyPattern {
                width: pattern.width(),
                height: pattern.height(),
            });
        }

        // may be negative when the pattern is larger than the world
        let offset_x = (i32::from(self.width) - i32::from(pattern.width())) / 2;
        let offset_y = (i32::from(self.height) - i32::from(pattern.height())) / 2;

        let mut stamped = 0;
        for &(px, py) in pattern.cells() {
            let x = offset_x + i32::from(px);
            let y = offset_y + i32::from(py);
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if self.set(x, y, true) {
                stamped += 1;
            }
        }

        debug!(
            "stamped {}x{} pattern at ({offset_x}, {offset_y}): {stamped} of {} live cells on grid",
            pattern.width(),
            pattern.height(),
            pattern.cells().len()
        );
        Ok(stamped)
    }

    /// Reads a pattern file and stamps it. On failure the world is unchanged.
    pub fn load_pattern(&mut self, path: impl AsRef<Path>) -> Result<u32> {
        let pattern = Pattern::load(path)?;
        self.stamp(&pattern)
    }

    /// Hash of the dimensions and the current generation.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.current.hash(&mut hasher);
        hasher.finish()
    }
}

fn zeroed(len: usize) -> std::result::Result<Vec<u8>, TryReserveError> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)?;
    cells.resize(len, DEAD);
    Ok(cells)
}
