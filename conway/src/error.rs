// error.rs - Failure results reported by the engine

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Every way an engine operation can fail.
///
/// Nothing here is retried by the engine. A pattern-load failure is
/// recoverable by the caller (typically by randomizing instead); allocation
/// and output failures end the run.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cannot allocate a {width}x{height} world")]
    Allocation {
        width: u16,
        height: u16,
        #[source]
        source: TryReserveError,
    },

    #[error("cannot read pattern file {}", path.display())]
    PatternRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("pattern is empty ({width}x{height})")]
    EmptyPattern { width: u16, height: u16 },

    #[error("cannot write grid state to {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LifeError {
    /// True for the failures a caller may recover from by seeding the world
    /// some other way.
    pub fn is_pattern_load(&self) -> bool {
        matches!(self, Self::PatternRead { .. } | Self::EmptyPattern { .. })
    }
}
