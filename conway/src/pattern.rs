// pattern.rs - Text patterns and the built-in pattern table

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{LifeError, Result};

/// Bytes past this column are ignored.
pub const MAX_PATTERN_WIDTH: usize = 256;
/// Non-blank rows past this one are ignored.
pub const MAX_PATTERN_HEIGHT: usize = 256;

pub const LIVE: u8 = b'*';

/// Live-cell coordinates `(x, y)` inside a `width x height` bounding box.
///
/// Parsed byte by byte: `*` is alive and every other byte is dead, so the
/// input need not be UTF-8. Blank lines do not count as rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    width: u16,
    height: u16,
    cells: Vec<(u16, u16)>,
}

impl Pattern {
    pub fn parse<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut builder = Builder::default();
        for line in reader.split(b'\n') {
            builder.push_line(&line?);
        }
        Ok(builder.finish())
    }

    pub fn from_text(text: &str) -> Self {
        let mut builder = Builder::default();
        for line in text.as_bytes().split(|&b| b == b'\n') {
            builder.push_line(line);
        }
        builder.finish()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| LifeError::PatternRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let pattern = Self::parse(BufReader::new(file)).map_err(read_err)?;
        debug!(
            "loaded {}x{} pattern with {} live cells from {}",
            pattern.width,
            pattern.height,
            pattern.cells.len(),
            path.display()
        );
        Ok(pattern)
    }

    /// Looks up a built-in pattern; case, `-`, `_` and spaces are ignored.
    pub fn builtin(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        BUILTIN
            .iter()
            .find(|b| normalize_name(b.name) == wanted)
            .map(Builtin::pattern)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[(u16, u16)] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Default)]
struct Builder {
    width: usize,
    rows: usize,
    cells: Vec<(u16, u16)>,
    clipped_columns: bool,
    dropped_rows: usize,
}

impl Builder {
    fn push_line(&mut self, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.iter().all(u8::is_ascii_whitespace) {
            return;
        }
        if self.rows == MAX_PATTERN_HEIGHT {
            self.dropped_rows += 1;
            return;
        }

        let mut len = 0;
        for (x, &b) in line.iter().enumerate() {
            if x == MAX_PATTERN_WIDTH {
                self.clipped_columns = true;
                break;
            }
            if b == LIVE {
                self.cells.push((x as u16, self.rows as u16));
            }
            len = x + 1;
        }
        self.width = self.width.max(len);
        self.rows += 1;
    }

    fn finish(self) -> Pattern {
        if self.clipped_columns {
            warn!("pattern rows clipped to {MAX_PATTERN_WIDTH} columns");
        }
        if self.dropped_rows > 0 {
            warn!(
                "pattern clipped to {MAX_PATTERN_HEIGHT} rows ({} dropped)",
                self.dropped_rows
            );
        }
        Pattern {
            width: self.width as u16,
            height: self.rows as u16,
            cells: self.cells,
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A named pattern given as `(row, col)` live cells.
pub struct Builtin {
    pub name: &'static str,
    pub cells: &'static [(u16, u16)],
}

impl Builtin {
    /// The cells shifted to their bounding box.
    pub fn pattern(&self) -> Pattern {
        let min_row = self.cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_col = self.cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let cells: Vec<(u16, u16)> = self
            .cells
            .iter()
            .map(|&(r, c)| (c - min_col, r - min_row))
            .collect();
        let width = cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        Pattern {
            width,
            height,
            cells,
        }
    }
}

pub const BUILTIN: &[Builtin] = &[
    Builtin {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Builtin {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Builtin {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Builtin {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Builtin {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Builtin {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Builtin {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];
