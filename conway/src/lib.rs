// lib.rs - Conway's Game of Life engine

//! A fixed-size Game of Life engine.
//!
//! A [`World`] owns two byte buffers and swaps them on every step. Neighbor
//! positions off the grid are resolved by a [`Boundary`] mode. Patterns are
//! stamped centered, and [`render`] turns the grid into terminal frames or an
//! exact text dump.

pub mod boundary;
pub mod config;
pub mod cycle;
pub mod error;
pub mod neighbors;
pub mod pattern;
pub mod render;
pub mod step;
pub mod world;

pub use boundary::Boundary;
pub use config::LifeConfig;
pub use cycle::CycleDetector;
pub use error::{LifeError, Result};
pub use pattern::Pattern;
pub use step::Kernel;
pub use world::World;
