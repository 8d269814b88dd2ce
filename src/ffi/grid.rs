//! Grid creation, seeding, cell access, and stepping.

use log::error;

use crate::automaton::{seed_bernoulli, Cell, Coord, Grid};
use crate::state::State;

/// Creates an all-dead grid with the specified dimensions and restarts the
/// engine (counters and generation return to 0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on negative dimensions or a lattice
/// larger than `MAX_CELLS`.
#[no_mangle]
pub unsafe extern "C" fn sa_create_grid(
    ptr: *mut State,
    width: i16,
    height: i16,
    depth: i16,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match Grid::new(width, height, depth) {
        Ok(grid) => {
            state.reset_grid(grid);
            0
        }
        Err(e) => {
            error!("sa_create_grid: {e}");
            2
        }
    }
}

/// Overwrites every cell with an independent draw: alive with probability
/// `density`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if `density` is outside [0, 1].
#[no_mangle]
pub unsafe extern "C" fn sa_seed_random(ptr: *mut State, density: f64) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match seed_bernoulli(&mut state.grid, density, &mut state.seed_rng) {
        Ok(()) => 0,
        Err(e) => {
            error!("sa_seed_random: {e}");
            2
        }
    }
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn sa_set_cell(ptr: *mut State, x: i16, y: i16, z: i16, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.grid.set(Coord::new(x, y, z), Cell::from_byte(alive));
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn sa_get_cell(ptr: *const State, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).grid.get(Coord::new(x, y, z)).as_byte()
}

/// Advances the automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if the engine rejected the grid.
#[no_mangle]
pub unsafe extern "C" fn sa_step(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match state.engine.advance(&mut state.grid) {
        Ok(_) => 0,
        Err(e) => {
            error!("sa_step: {e}");
            2
        }
    }
}
