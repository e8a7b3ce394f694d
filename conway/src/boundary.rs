// boundary.rs - Edge-handling policies for neighbor lookups

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maps a coordinate on one axis onto the grid, or `None` if it stays off-grid.
pub type AxisResolver = fn(coord: i32, size: i32) -> Option<i32>;

/// How neighbor positions outside the grid are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Off-grid neighbors are dead.
    #[default]
    Edge,
    /// Coordinates wrap around both axes.
    Torus,
    /// Coordinates reflect back into the grid.
    Mirror,
    /// Off-grid neighbors are alive.
    AliveRim,
}

impl Boundary {
    pub const ALL: [Boundary; 4] = [
        Boundary::Edge,
        Boundary::Torus,
        Boundary::Mirror,
        Boundary::AliveRim,
    ];

    /// Per-axis coordinate resolution for this mode. Chosen once per step.
    pub fn axis_resolver(self) -> AxisResolver {
        match self {
            Boundary::Edge | Boundary::AliveRim => clip,
            Boundary::Torus => wrap,
            Boundary::Mirror => reflect,
        }
    }

    /// Value contributed by a neighbor the resolver left off-grid.
    pub fn off_grid_value(self) -> u8 {
        match self {
            Boundary::AliveRim => 1,
            _ => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Boundary::Edge => "edge",
            Boundary::Torus => "torus",
            Boundary::Mirror => "mirror",
            Boundary::AliveRim => "alive-rim",
        }
    }
}

fn clip(coord: i32, size: i32) -> Option<i32> {
    (0..size).contains(&coord).then_some(coord)
}

fn wrap(coord: i32, size: i32) -> Option<i32> {
    Some(((coord % size) + size) % size)
}

// Below zero reflects to -c, past the end to size-1-(c-size). The high side
// lands on the edge cell itself; on a one-cell axis -1 reflects to 1, which
// is pulled back to 0.
fn reflect(coord: i32, size: i32) -> Option<i32> {
    let reflected = if coord < 0 {
        -coord
    } else if coord >= size {
        size - 1 - (coord - size)
    } else {
        coord
    };
    Some(reflected.max(0).min(size - 1))
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown boundary mode '{0}' (expected edge, torus, mirror or alive-rim)")]
pub struct ParseBoundaryError(String);

impl FromStr for Boundary {
    type Err = ParseBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "edge" => Ok(Boundary::Edge),
            "torus" | "wrap" => Ok(Boundary::Torus),
            "mirror" => Ok(Boundary::Mirror),
            "alive-rim" | "alive" => Ok(Boundary::AliveRim),
            _ => Err(ParseBoundaryError(s.to_string())),
        }
    }
}
