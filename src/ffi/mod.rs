//! C FFI layer for engine hosts.
//!
//! This module exports C ABI functions for use with LuaJIT FFI or any other C
//! caller. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` and `engine` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions. None of them panic across the boundary.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod stats;

pub use grid::{sa_create_grid, sa_get_cell, sa_seed_random, sa_set_cell, sa_step};
pub use lifecycle::{sa_create, sa_destroy, sa_get_generation};
pub use region::{sa_extract_region, sa_import_region};
pub use stats::{sa_get_alive_count, sa_get_births, sa_get_deaths, sa_get_occupancy};
