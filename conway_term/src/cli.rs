// cli.rs - Command-line flags layered over an optional JSON config

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use conway::{Boundary, LifeConfig};

/// Run Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(name = "conway_term", version, about)]
pub struct Args {
    /// JSON config file; flags given here override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u16>,

    /// Edge handling: edge, torus, mirror or alive-rim.
    #[arg(long)]
    pub boundary: Option<Boundary>,

    /// Pattern file to stamp at the center (`*` alive, anything else dead).
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Built-in pattern to stamp instead of a file (see --list-patterns).
    #[arg(long, short)]
    pub pattern: Option<String>,

    /// File the final grid is written to.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Frames per second; 0 runs as fast as possible.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Render block size; each character covers scale x scale cells.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub scale: Option<u16>,

    /// Number of generations to run.
    #[arg(long, short)]
    pub generations: Option<u64>,

    /// Seed for the random fill.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without drawing frames.
    #[arg(long)]
    pub no_render: bool,

    /// Stop as soon as the grid repeats.
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Print the built-in pattern names and exit.
    #[arg(long)]
    pub list_patterns: bool,
}

impl Args {
    /// Resolves the run configuration: file (or defaults), then flags.
    pub fn into_config(self) -> Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => LifeConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(boundary) = self.boundary {
            config.boundary = boundary;
        }
        if let Some(input) = self.input {
            config.input = Some(input);
        }
        if let Some(pattern) = self.pattern {
            config.pattern = Some(pattern);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(fps) = self.fps {
            config.refresh_rate = fps;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_render {
            config.render = false;
        }
        if self.stop_on_cycle {
            config.stop_on_cycle = true;
        }

        config.validate()?;
        Ok(config)
    }
}
