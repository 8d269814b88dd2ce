//! Generation stepping: boundary zeroing followed by one interior scan.
//!
//! Two strategies are provided:
//! - [`ScanMode::InPlace`]: cells are evaluated in x, y, z nested order and
//!   every write lands immediately, so later cells of the same pass observe
//!   earlier births and deaths. This is the reference behavior.
//! - [`ScanMode::Snapshot`]: every classification reads the generation-N
//!   snapshot and writes go to the generation-N+1 buffer. Classification is
//!   pure and runs across x-slabs on a rayon pool; random draws are then made
//!   sequentially in scan order so results do not depend on thread count.
//!   Trajectories differ from the in-place scan.
//!
//! Boundary faces are zeroed before the scan and again after it: births may
//! target a face cell (and are counted, and visible to later cells of an
//! in-place pass), but no face cell survives the generation.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Coord, Grid};
use super::neighborhood::{DiagonalProbe, Neighborhood};
use super::rules::{resolve, Transition};

/// Interior scan strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    #[default]
    InPlace,
    Snapshot,
}

/// Birth and death counts. Used both as a per-step report and as the
/// engine's running total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub births: u64,
    pub deaths: u64,
}

impl Tally {
    /// Count one transition.
    pub fn record(&mut self, transition: &Transition) {
        match transition {
            Transition::IsolationDeath(_) | Transition::OvercrowdingDeath(_) => self.deaths += 1,
            Transition::Birth { .. } => self.births += 1,
        }
    }

    /// Fold another tally into this one.
    pub fn absorb(&mut self, other: Tally) {
        self.births += other.births;
        self.deaths += other.deaths;
    }
}

fn apply(grid: &mut Grid, transition: &Transition) {
    match *transition {
        Transition::IsolationDeath(at) | Transition::OvercrowdingDeath(at) => {
            grid.set(at, Cell::Dead);
        }
        Transition::Birth { target, .. } => {
            grid.set(target, Cell::Alive);
        }
    }
}

/// Advance `grid` by one generation, mutating in place in scan order.
///
/// Every transition is counted into `tally` and passed to `on_transition`.
pub fn step_in_place<R, F>(
    grid: &mut Grid,
    probe: DiagonalProbe,
    rng: &mut R,
    tally: &mut Tally,
    mut on_transition: F,
) where
    R: Rng + ?Sized,
    F: FnMut(&Transition),
{
    grid.zero_boundary();
    if grid.shape().is_degenerate() {
        return;
    }

    let (width, height, depth) = (grid.width(), grid.height(), grid.depth());

    for x in 1..width - 1 {
        for y in 1..height - 1 {
            for z in 1..depth - 1 {
                let at = Coord::new(x, y, z);
                if !grid.get(at).is_alive() {
                    continue;
                }

                let hood = Neighborhood::read(grid, at, probe);
                let transition = resolve(at, &hood, rng);
                apply(grid, &transition);
                tally.record(&transition);
                on_transition(&transition);
            }
        }
    }

    grid.zero_boundary();
}

/// Live subjects of one x-slab with their neighborhoods, in y, z order.
fn classify_slab(snapshot: &Grid, x: i16, probe: DiagonalProbe) -> Vec<(Coord, Neighborhood)> {
    let mut subjects = Vec::new();
    for y in 1..snapshot.height() - 1 {
        for z in 1..snapshot.depth() - 1 {
            let at = Coord::new(x, y, z);
            if snapshot.get(at).is_alive() {
                subjects.push((at, Neighborhood::read(snapshot, at, probe)));
            }
        }
    }
    subjects
}

/// Advance `grid` by one generation, classifying every subject against the
/// pre-scan snapshot.
///
/// With `pool`, slabs are classified in parallel; without, sequentially.
/// Both paths produce identical results for the same RNG state.
pub fn step_snapshot<R, F>(
    grid: &mut Grid,
    probe: DiagonalProbe,
    rng: &mut R,
    tally: &mut Tally,
    pool: Option<&rayon::ThreadPool>,
    mut on_transition: F,
) where
    R: Rng + ?Sized,
    F: FnMut(&Transition),
{
    grid.zero_boundary();
    if grid.shape().is_degenerate() {
        return;
    }

    let snapshot = grid.clone();
    let width = snapshot.width();

    let slabs: Vec<Vec<(Coord, Neighborhood)>> = match pool {
        Some(pool) => pool.install(|| {
            (1..width - 1)
                .into_par_iter()
                .map(|x| classify_slab(&snapshot, x, probe))
                .collect()
        }),
        None => (1..width - 1)
            .map(|x| classify_slab(&snapshot, x, probe))
            .collect(),
    };

    for (at, hood) in slabs.into_iter().flatten() {
        let transition = resolve(at, &hood, rng);
        apply(grid, &transition);
        tally.record(&transition);
        on_transition(&transition);
    }

    grid.zero_boundary();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn full_grid(n: i16) -> Grid {
        let mut grid = Grid::new(n, n, n).unwrap();
        grid.cells_mut().fill(Cell::Alive);
        grid
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(6, 6, 6).unwrap();
        let mut rng = create_rng(0);
        let mut tally = Tally::default();

        for _ in 0..5 {
            step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |_| {});
        }

        assert_eq!(grid.alive_count(), 0);
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = Grid::new(7, 7, 7).unwrap();
        grid.set(Coord::new(3, 3, 3), Cell::Alive);
        let mut rng = create_rng(0);
        let mut tally = Tally::default();

        step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |_| {});

        assert_eq!(tally, Tally { births: 0, deaths: 1 });
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_boundary_cells_are_not_subjects() {
        let mut grid = Grid::new(5, 5, 5).unwrap();
        grid.set(Coord::new(0, 2, 2), Cell::Alive);
        grid.set(Coord::new(4, 4, 4), Cell::Alive);
        let mut rng = create_rng(0);
        let mut tally = Tally::default();

        step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |_| {});

        assert_eq!(tally, Tally::default());
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_full_cube_in_place() {
        // After zeroing, only the 3x3x3 interior is alive. The center has all
        // 14 neighbors alive and dies of overcrowding. Every interior cell is
        // still alive when reached, so each yields exactly one transition.
        let mut grid = full_grid(5);
        let mut rng = create_rng(3);
        let mut tally = Tally::default();
        let mut overcrowded = Vec::new();

        step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |t| {
            if let Transition::OvercrowdingDeath(at) = t {
                overcrowded.push(*at);
            }
        });

        assert_eq!(tally.births + tally.deaths, 27);
        assert_eq!(overcrowded.first(), Some(&Coord::new(2, 2, 2)));
        assert_eq!(overcrowded.len() as u64, tally.deaths);
        assert!(grid.boundary_is_dead());
    }

    #[test]
    fn test_full_cube_snapshot_counts() {
        // In the snapshot every face is dead, so only the center lacks a dead
        // neighbor.
        let mut grid = full_grid(5);
        let mut rng = create_rng(3);
        let mut tally = Tally::default();

        step_snapshot(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, None, |_| {});

        assert_eq!(tally, Tally { births: 26, deaths: 1 });
        assert!(grid.boundary_is_dead());
    }

    #[test]
    fn test_in_place_birth_is_seen_by_later_cells() {
        // Two face-adjacent live cells along z. The first subject (z=3) has a
        // single live neighbor, so it gives birth. Whatever it animates is
        // visible when (3,3,4) is evaluated next.
        let mut grid = Grid::new(8, 8, 8).unwrap();
        grid.set(Coord::new(3, 3, 3), Cell::Alive);
        grid.set(Coord::new(3, 3, 4), Cell::Alive);
        let mut rng = create_rng(11);
        let mut tally = Tally::default();
        let mut births = Vec::new();

        step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |t| {
            if let Transition::Birth { parent, target } = t {
                births.push((*parent, *target));
            }
        });

        // Both subjects have a live partner and 13 dead neighbors: two births.
        assert_eq!(tally.deaths, 0);
        assert!(tally.births >= 2);
        assert_eq!(births[0].0, Coord::new(3, 3, 3));
        assert_eq!(births[1].0, Coord::new(3, 3, 4));
        for (_, target) in &births {
            assert_eq!(grid.get(*target), Cell::Alive);
        }
    }

    #[test]
    fn test_snapshot_parallel_matches_sequential() {
        let mut seeded = Grid::new(16, 16, 16).unwrap();
        let mut init = create_rng(2024);
        crate::automaton::seeding::seed_bernoulli(&mut seeded, 0.2, &mut init).unwrap();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        let mut sequential = seeded.clone();
        let mut parallel = seeded;
        let mut rng_a = create_rng(9);
        let mut rng_b = create_rng(9);
        let mut tally_a = Tally::default();
        let mut tally_b = Tally::default();

        for _ in 0..4 {
            step_snapshot(
                &mut sequential,
                DiagonalProbe::Paired,
                &mut rng_a,
                &mut tally_a,
                None,
                |_| {},
            );
            step_snapshot(
                &mut parallel,
                DiagonalProbe::Paired,
                &mut rng_b,
                &mut tally_b,
                Some(&pool),
                |_| {},
            );
        }

        assert_eq!(sequential, parallel);
        assert_eq!(tally_a, tally_b);
    }

    #[test]
    fn test_degenerate_grid_only_zeroes_boundary() {
        let mut grid = Grid::new(2, 6, 6).unwrap();
        grid.cells_mut().fill(Cell::Alive);
        let mut rng = create_rng(0);
        let mut tally = Tally::default();

        step_in_place(&mut grid, DiagonalProbe::Paired, &mut rng, &mut tally, |_| {});

        assert_eq!(grid.alive_count(), 0);
        assert_eq!(tally, Tally::default());
    }
}
