//! Counter queries for reporting hosts.

use crate::state::State;

/// Cumulative birth events since the grid was created. 0 on null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn sa_get_births(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.births()
}

/// Cumulative isolation and overcrowding deaths since the grid was created. 0 on null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn sa_get_deaths(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.deaths()
}

/// Cumulative births divided by the grid's total cell count. 0.0 on null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn sa_get_occupancy(ptr: *const State) -> f64 {
    if ptr.is_null() {
        return 0.0;
    }
    let state = &*ptr;
    state.engine.occupancy_fraction(&state.grid)
}

/// Number of live cells currently in the grid. 0 on null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn sa_get_alive_count(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid.alive_count() as u64
}
