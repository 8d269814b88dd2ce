//! Stochastic Life 3D - probabilistic 3D cellular automaton library
//!
//! Evolves a fixed-size cubic occupancy grid under a probabilistic
//! 14-neighbor rule: isolated or overcrowded live cells die, and every other
//! live cell animates one randomly chosen dead neighbor. The library is usable
//! from Rust directly and exposes a C ABI for engine hosts.

pub mod automaton;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod report;
pub mod rng;
pub mod state;


pub use automaton::{
    Cell, Coord, DiagonalProbe, Grid, Region, ScanMode, Shape, Tally, Transition, MAX_CELLS,
};
pub use config::{EngineConfig, SimConfig};
pub use driver::{run, RunSummary};
pub use engine::{Engine, StepReport};
pub use error::AutomatonError;
pub use report::{LogReporter, Observer, Report};
