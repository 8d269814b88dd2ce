//! Region extraction and import FFI functions.

use crate::automaton::{extract_region, import_region, Coord, Region};
use crate::state::State;

/// Buffer length the caller promised for a requested (unclamped) box.
fn requested_len(region: &Region) -> usize {
    let span = |lo: i16, hi: i16| (hi as i32 - lo as i32).max(0) as usize;
    span(region.min.x, region.max.x)
        * span(region.min.y, region.max.y)
        * span(region.min.z, region.max.z)
}

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This matches the layout expected by `sa_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn sa_extract_region(
    ptr: *const State,
    out_buf: *mut u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let region = Region::new(Coord::new(min_x, min_y, min_z), Coord::new(max_x, max_y, max_z));

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, requested_len(&region));
    extract_region(&state.grid, buf_slice, region)
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `sa_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn sa_import_region(
    ptr: *mut State,
    in_buf: *const u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    let region = Region::new(Coord::new(min_x, min_y, min_z), Coord::new(max_x, max_y, max_z));

    let buf_slice = std::slice::from_raw_parts(in_buf, requested_len(&region));
    import_region(&mut state.grid, buf_slice, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{grid, lifecycle};
    use std::ptr;

    #[test]
    fn test_extract_region() {
        unsafe {
            let state = lifecycle::sa_create(0);
            grid::sa_create_grid(state, 8, 8, 8);

            grid::sa_set_cell(state, 2, 2, 2, 1);
            grid::sa_set_cell(state, 3, 2, 2, 1);

            let mut buffer = vec![0u8; 64];
            let bytes = sa_extract_region(state, buffer.as_mut_ptr(), 2, 2, 2, 6, 6, 6);

            assert_eq!(bytes, 64);
            assert_eq!(buffer[0], 1);
            assert_eq!(buffer[1], 1);
            assert_eq!(buffer.iter().filter(|&&b| b == 1).count(), 2);

            lifecycle::sa_destroy(state);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let state = lifecycle::sa_create(0);
            grid::sa_create_grid(state, 8, 8, 8);

            let mut buffer = vec![0u8; 64];
            buffer[0] = 1;
            buffer[1] = 5;

            let bytes = sa_import_region(state, buffer.as_ptr(), 2, 2, 2, 6, 6, 6);

            assert_eq!(bytes, 64);
            assert_eq!(grid::sa_get_cell(state, 2, 2, 2), 1);
            assert_eq!(grid::sa_get_cell(state, 3, 2, 2), 1);
            assert_eq!(grid::sa_get_cell(state, 4, 2, 2), 0);

            lifecycle::sa_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = vec![0u8; 64];

            assert_eq!(
                sa_extract_region(ptr::null(), buffer.as_mut_ptr(), 0, 0, 0, 4, 4, 4),
                0
            );
            assert_eq!(
                sa_import_region(ptr::null_mut(), buffer.as_ptr(), 0, 0, 0, 4, 4, 4),
                0
            );
            assert_eq!(
                sa_import_region(ptr::null_mut(), ptr::null(), 0, 0, 0, 4, 4, 4),
                0
            );
        }
    }
}
