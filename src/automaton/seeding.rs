//! Initial-state sampling.

use rand::Rng;

use super::grid::{Cell, Grid};
use crate::error::AutomatonError;

/// Occupancy probability of the reference configuration.
pub const DEFAULT_DENSITY: f64 = 0.01;

fn check_density(density: f64) -> Result<(), AutomatonError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(AutomatonError::InvalidDensity(density))
    }
}

/// Overwrite every cell with an independent Bernoulli draw: alive with
/// probability `density`, dead otherwise.
///
/// One draw per cell, in storage order.
pub fn seed_bernoulli<R: Rng + ?Sized>(
    grid: &mut Grid,
    density: f64,
    rng: &mut R,
) -> Result<(), AutomatonError> {
    check_density(density)?;

    for cell in grid.cells_mut() {
        *cell = Cell::from(rng.gen_bool(density));
    }
    Ok(())
}

/// Build a new grid and seed it with [`seed_bernoulli`].
pub fn random_grid<R: Rng + ?Sized>(
    width: i16,
    height: i16,
    depth: i16,
    density: f64,
    rng: &mut R,
) -> Result<Grid, AutomatonError> {
    check_density(density)?;
    let mut grid = Grid::new(width, height, depth)?;
    seed_bernoulli(&mut grid, density, rng)?;
    Ok(grid)
}
