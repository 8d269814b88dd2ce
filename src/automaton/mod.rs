//! Core automaton logic and grid operations.
//!
//! This module contains the logic for manipulating grid state, classifying
//! neighborhoods, stepping the automaton, seeding initial states and
//! extracting/importing regions. The engine and the FFI layer in `ffi/` call
//! these functions.

pub mod grid;
pub mod neighborhood;
pub mod region;
pub mod rules;
pub mod seeding;
pub mod stepping;

pub use grid::{Cell, Coord, Grid, Shape, MAX_CELLS};
pub use neighborhood::{DiagonalProbe, Neighborhood, NEIGHBOR_COUNT};
pub use region::{extract_region, import_region, Region};
pub use rules::{classify, resolve, Transition, Verdict};
pub use seeding::{random_grid, seed_bernoulli, DEFAULT_DENSITY};
pub use stepping::{step_in_place, step_snapshot, ScanMode, Tally};
