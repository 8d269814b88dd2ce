//! Transition rule for live interior cells.
//!
//! - Isolation: no live neighbor, the subject dies.
//! - Overcrowding: no dead neighbor, the subject dies.
//! - Otherwise one dead neighbor, drawn uniformly, is born. The subject is untouched.
//!
//! Dead cells are never subjects; they only come alive as birth targets.

use rand::Rng;

use super::grid::Coord;
use super::neighborhood::Neighborhood;

/// Outcome of classifying a live cell's neighborhood, before any random draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Isolated,
    Overcrowded,
    /// Both sets are non-empty; a birth will be drawn from `dead` candidates.
    Mixed { dead: usize },
}

/// The effect a single subject has on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    IsolationDeath(Coord),
    OvercrowdingDeath(Coord),
    Birth { parent: Coord, target: Coord },
}

/// Classify a neighborhood. With 14 positions, at most one death cause holds.
pub fn classify(hood: &Neighborhood) -> Verdict {
    if hood.live_count() == 0 {
        Verdict::Isolated
    } else if hood.dead_count() == 0 {
        Verdict::Overcrowded
    } else {
        Verdict::Mixed {
            dead: hood.dead_count(),
        }
    }
}

/// Resolve the transition for the live subject at `at`.
///
/// Draws exactly one integer in `[0, |D|)` from `rng` for a birth and nothing otherwise.
pub fn resolve<R: Rng + ?Sized>(at: Coord, hood: &Neighborhood, rng: &mut R) -> Transition {
    match classify(hood) {
        Verdict::Isolated => Transition::IsolationDeath(at),
        Verdict::Overcrowded => Transition::OvercrowdingDeath(at),
        Verdict::Mixed { .. } => {
            let dead = hood.dead_cells();
            let target = dead[rng.gen_range(0..dead.len())];
            Transition::Birth { parent: at, target }
        }
    }
}
