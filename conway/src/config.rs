// config.rs - Run configuration accepted from the driver

//! Settings for one simulation run.
//!
//! `LifeConfig` can be deserialized from a JSON file; every field is optional
//! in the file and falls back to [`LifeConfig::default`]. The driver layers
//! its command-line flags on top.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::error::{LifeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Edge handling for neighbor lookups.
    pub boundary: Boundary,
    /// Pattern file to stamp at startup.
    pub input: Option<PathBuf>,
    /// Built-in pattern to stamp at startup; takes precedence over `input`.
    pub pattern: Option<String>,
    /// Where the final grid is written.
    pub output: PathBuf,
    /// Frames per second for the driver's pacing; 0 runs unpaced.
    pub refresh_rate: u32,
    /// Render block size; must be at least 1.
    pub scale: u16,
    /// Number of generations to run.
    pub generations: u64,
    /// Seed for the randomizer. Unseeded runs differ every time.
    pub seed: Option<u64>,
    /// Draw frames to the terminal while running.
    pub render: bool,
    /// End the run early once the grid repeats.
    pub stop_on_cycle: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            boundary: Boundary::Edge,
            input: None,
            pattern: None,
            output: PathBuf::from("final_state.txt"),
            refresh_rate: 10,
            scale: 1,
            generations: 1000,
            seed: None,
            render: true,
            stop_on_cycle: false,
        }
    }
}

impl LifeConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LifeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(LifeError::InvalidConfig("scale must be at least 1".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(LifeError::InvalidConfig("output path is empty".into()));
        }
        Ok(())
    }

    /// Time between frames, or `None` when unpaced.
    pub fn frame_interval(&self) -> Option<Duration> {
        (self.refresh_rate > 0).then(|| Duration::from_secs(1) / self.refresh_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.frame_interval(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LifeConfig =
            serde_json::from_str(r#"{ "width": 20, "boundary": "alive-rim", "scale": 2 }"#)
                .unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 40);
        assert_eq!(config.boundary, Boundary::AliveRim);
        assert_eq!(config.scale, 2);
        assert!(config.render);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let config = LifeConfig {
            scale: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn zero_refresh_rate_is_unpaced() {
        let config = LifeConfig {
            refresh_rate: 0,
            ..LifeConfig::default()
        };
        assert_eq!(config.frame_interval(), None);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = LifeConfig::from_json_file("/nonexistent/conway.json").unwrap_err();
        assert!(matches!(err, LifeError::ConfigRead { .. }));
    }
}
