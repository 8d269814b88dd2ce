//! Region extraction and import for renderers and external initializers.

use super::grid::{Cell, Coord, Grid};

/// A half-open box `[min, max)` of lattice coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min: Coord,
    pub max: Coord,
}

impl Region {
    pub fn new(min: Coord, max: Coord) -> Self {
        Region { min, max }
    }

    /// Clamp to grid bounds. Returns None for empty or inverted regions.
    pub fn clamp_to(&self, grid: &Grid) -> Option<Region> {
        let clamp = |v: i16, hi: i16| v.max(0).min(hi);

        let min = Coord::new(
            clamp(self.min.x, grid.width()),
            clamp(self.min.y, grid.height()),
            clamp(self.min.z, grid.depth()),
        );
        let max = Coord::new(
            clamp(self.max.x, grid.width()),
            clamp(self.max.y, grid.height()),
            clamp(self.max.z, grid.depth()),
        );

        if min.x >= max.x || min.y >= max.y || min.z >= max.z {
            return None;
        }
        Some(Region { min, max })
    }

    /// Number of cells in the region (0 if inverted).
    pub fn volume(&self) -> usize {
        let span = |lo: i16, hi: i16| (hi - lo).max(0) as usize;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }
}

/// Extract a rectangular region from the grid into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest),
/// one byte per cell: 0 = dead, 1 = alive.
///
/// # Returns
/// Number of bytes written, or 0 if the clamped region is empty or the
/// buffer is too small.
pub fn extract_region(grid: &Grid, out_buf: &mut [u8], region: Region) -> u64 {
    let region = match region.clamp_to(grid) {
        Some(r) => r,
        None => return 0,
    };

    if out_buf.len() < region.volume() {
        return 0;
    }

    let mut offset = 0;
    for z in region.min.z..region.max.z {
        for y in region.min.y..region.max.y {
            for x in region.min.x..region.max.x {
                out_buf[offset] = grid.get(Coord::new(x, y, z)).as_byte();
                offset += 1;
            }
        }
    }

    offset as u64
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// # Layout
/// Same z,y,x order as [`extract_region`]. Any non-zero byte is alive.
///
/// # Returns
/// Number of bytes read, or 0 if the clamped region is empty or the buffer
/// is too small.
pub fn import_region(grid: &mut Grid, in_buf: &[u8], region: Region) -> u64 {
    let region = match region.clamp_to(grid) {
        Some(r) => r,
        None => return 0,
    };

    if in_buf.len() < region.volume() {
        return 0;
    }

    let mut offset = 0;
    for z in region.min.z..region.max.z {
        for y in region.min.y..region.max.y {
            for x in region.min.x..region.max.x {
                grid.set(Coord::new(x, y, z), Cell::from_byte(in_buf[offset]));
                offset += 1;
            }
        }
    }

    offset as u64
}
