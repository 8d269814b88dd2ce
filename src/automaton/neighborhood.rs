//! The fixed 14-cell neighborhood and its live/dead partition.
//!
//! A subject at (i, j, k) sees its six face neighbors plus eight diagonal
//! neighbors drawn from a fixed, deliberately asymmetric offset set:
//!
//! ```text
//! (+1,+1,+1) (+1,+1, 0) (+1, 0,+1) ( 0,+1,+1)
//! (-1,-1,-1) (-1,-1, 0) (-1, 0,-1) ( 0,-1,-1)
//! ```
//!
//! Enumeration order is fixed (diagonals first, then faces) because birth
//! targets are drawn by index from the dead set.

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Coord, Grid};

/// Number of positions in every neighborhood.
pub const NEIGHBOR_COUNT: usize = 14;

/// Diagonal offsets, in enumeration order.
pub const DIAGONAL_OFFSETS: [(i16, i16, i16); 8] = [
    (1, 1, 1),
    (1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (-1, -1, -1),
    (-1, -1, 0),
    (-1, 0, -1),
    (0, -1, -1),
];

/// Face offsets, in enumeration order: +z, -z, +y, -y, +x, -x.
pub const FACE_OFFSETS: [(i16, i16, i16); 6] = [
    (0, 0, 1),
    (0, 0, -1),
    (0, 1, 0),
    (0, -1, 0),
    (1, 0, 0),
    (-1, 0, 0),
];

/// Where the state of each diagonal is read from under [`DiagonalProbe::Shifted`].
///
/// The four "plus" diagonals read themselves; the four "minus" diagonals read
/// a rotated partner.
const SHIFTED_DIAGONAL_PROBES: [(i16, i16, i16); 8] = [
    (1, 1, 1),
    (1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (-1, -1, 0),
    (-1, 0, -1),
    (0, -1, -1),
    (-1, -1, -1),
];

/// How diagonal neighbor states are sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalProbe {
    /// Each diagonal coordinate is paired with its own state.
    #[default]
    Paired,
    /// The four minus-side diagonals report the state of a neighboring
    /// diagonal cell while keeping their own coordinate. Reproduces the
    /// historical reference runs.
    Shifted,
}

/// All 14 offsets in enumeration order.
pub fn neighbor_offsets() -> impl Iterator<Item = (i16, i16, i16)> {
    DIAGONAL_OFFSETS.into_iter().chain(FACE_OFFSETS)
}

/// A classified neighborhood of one interior cell.
///
/// Fixed-capacity storage: no allocation per evaluated cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    coords: [Coord; NEIGHBOR_COUNT],
    states: [Cell; NEIGHBOR_COUNT],
    live: u8,
    /// Dead coordinates packed at the front, in enumeration order.
    dead: [Coord; NEIGHBOR_COUNT],
}

impl Neighborhood {
    /// Read the 14 neighbors of `at` from `grid`.
    ///
    /// `at` must be interior: every offset then stays within `0..dim` on each
    /// axis, so no index can under- or overflow.
    pub fn read(grid: &Grid, at: Coord, probe: DiagonalProbe) -> Self {
        debug_assert!(grid.is_interior(at), "{at} is not an interior cell");

        let mut coords = [Coord::default(); NEIGHBOR_COUNT];
        let mut states = [Cell::Dead; NEIGHBOR_COUNT];
        let mut live = 0u8;

        let probes = match probe {
            DiagonalProbe::Paired => &DIAGONAL_OFFSETS,
            DiagonalProbe::Shifted => &SHIFTED_DIAGONAL_PROBES,
        };

        for (slot, (&(dx, dy, dz), &(px, py, pz))) in
            DIAGONAL_OFFSETS.iter().zip(probes.iter()).enumerate()
        {
            coords[slot] = at.offset(dx, dy, dz);
            states[slot] = grid.get(at.offset(px, py, pz));
        }

        for (n, &(dx, dy, dz)) in FACE_OFFSETS.iter().enumerate() {
            let slot = DIAGONAL_OFFSETS.len() + n;
            coords[slot] = at.offset(dx, dy, dz);
            states[slot] = grid.get(coords[slot]);
        }

        let mut dead = [Coord::default(); NEIGHBOR_COUNT];
        let mut dead_len = 0;
        for (&coord, state) in coords.iter().zip(&states) {
            if state.is_alive() {
                live += 1;
            } else {
                dead[dead_len] = coord;
                dead_len += 1;
            }
        }

        Neighborhood {
            coords,
            states,
            live,
            dead,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live as usize
    }

    pub fn dead_count(&self) -> usize {
        NEIGHBOR_COUNT - self.live as usize
    }

    /// Coordinates of live neighbors, in enumeration order.
    pub fn live(&self) -> impl Iterator<Item = Coord> + '_ {
        self.partition(Cell::Alive)
    }

    /// Coordinates of dead neighbors, in enumeration order.
    pub fn dead(&self) -> impl Iterator<Item = Coord> + '_ {
        self.dead_cells().iter().copied()
    }

    /// The dead set as a slice of length [`dead_count`](Self::dead_count).
    pub fn dead_cells(&self) -> &[Coord] {
        &self.dead[..self.dead_count()]
    }

    /// The `n`-th dead neighbor, if any.
    pub fn nth_dead(&self, n: usize) -> Option<Coord> {
        self.dead_cells().get(n).copied()
    }

    /// All 14 (coordinate, state) pairs in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords.iter().copied().zip(self.states.iter().copied())
    }

    fn partition(&self, wanted: Cell) -> impl Iterator<Item = Coord> + '_ {
        self.entries()
            .filter(move |&(_, state)| state == wanted)
            .map(|(coord, _)| coord)
    }
}
