//! State creation, destruction, and generation queries.

use crate::state::State;

/// Creates a new automaton state and returns an opaque pointer.
///
/// `seed` fixes both the initializer and engine random streams.
///
/// # Safety
/// The returned pointer must eventually be freed with `sa_destroy()`.
#[no_mangle]
pub extern "C" fn sa_create(seed: u64) -> *mut State {
    Box::into_raw(Box::new(State::new(seed)))
}

/// Destroys an automaton state and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `sa_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn sa_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of generations advanced since the grid was created.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn sa_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.generation()
}
