//! Driver loop: seed a grid, observe it, then advance and observe N times.

use log::info;

use crate::automaton::{random_grid, Grid};
use crate::config::SimConfig;
use crate::engine::Engine;
use crate::error::AutomatonError;
use crate::report::{Observer, Report};
use crate::rng::{derive_rng, ENGINE_STREAM, INITIALIZER_STREAM};

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Base seed actually used.
    pub seed: u64,
    pub final_report: Report,
    pub grid: Grid,
}

/// Run the configured simulation, calling `observer` on the initial state
/// and after every generation.
pub fn run<O: Observer + ?Sized>(
    config: &SimConfig,
    observer: &mut O,
) -> Result<RunSummary, AutomatonError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    info!(
        "Starting run: grid {}x{}x{}, density {}, {} generations, seed {}",
        config.width, config.height, config.depth, config.initial_density, config.generations, seed
    );

    let mut init_rng = derive_rng(seed, INITIALIZER_STREAM);
    let mut grid = random_grid(
        config.width,
        config.height,
        config.depth,
        config.initial_density,
        &mut init_rng,
    )?;
    info!("Initial live cells: {}", grid.alive_count());

    let mut engine = Engine::with_config(&config.engine, derive_rng(seed, ENGINE_STREAM))?;

    observer.observe(&grid, &engine.report(&grid));

    for _ in 0..config.generations {
        engine.advance(&mut grid)?;
        observer.observe(&grid, &engine.report(&grid));
    }

    let final_report = engine.report(&grid);
    info!(
        "Run complete: births={} deaths={} alive={}",
        final_report.births, final_report.deaths, final_report.alive
    );

    Ok(RunSummary {
        seed,
        final_report,
        grid,
    })
}
