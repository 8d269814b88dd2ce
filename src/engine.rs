//! The automaton engine: running counters, the random source and the scan
//! strategy, applied to a caller-owned grid one generation at a time.

use log::{debug, warn};
use rand_chacha::ChaCha12Rng;

use crate::automaton::{
    step_in_place, step_snapshot, DiagonalProbe, Grid, ScanMode, Shape, Tally, Transition,
};
use crate::config::EngineConfig;
use crate::error::AutomatonError;
use crate::report::Report;
use crate::rng::create_rng;

/// Births and deaths contributed by a single `advance` call.
pub type StepReport = Tally;

pub struct Engine {
    rng: ChaCha12Rng,
    scan: ScanMode,
    probe: DiagonalProbe,
    /// Only present for snapshot scans with more than one worker.
    pool: Option<rayon::ThreadPool>,
    tally: Tally,
    generation: u64,
    /// Shape of the first grid advanced; later grids must match.
    shape: Option<Shape>,
}

impl Engine {
    /// In-place engine with paired diagonal probes, seeded deterministically.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(create_rng(seed))
    }

    /// In-place engine drawing from the given random source.
    pub fn from_rng(rng: ChaCha12Rng) -> Self {
        Engine {
            rng,
            scan: ScanMode::InPlace,
            probe: DiagonalProbe::Paired,
            pool: None,
            tally: Tally::default(),
            generation: 0,
            shape: None,
        }
    }

    /// Engine with an explicit scan strategy and probe.
    pub fn with_config(config: &EngineConfig, rng: ChaCha12Rng) -> Result<Self, AutomatonError> {
        if config.threads == 0 {
            return Err(AutomatonError::InvalidThreads);
        }

        let pool = if config.scan == ScanMode::Snapshot && config.threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.threads)
                    .build()?,
            )
        } else {
            None
        };

        Ok(Engine {
            scan: config.scan,
            probe: config.diagonal_probe,
            pool,
            ..Self::from_rng(rng)
        })
    }

    /// Advance `grid` by one generation.
    pub fn advance(&mut self, grid: &mut Grid) -> Result<StepReport, AutomatonError> {
        self.advance_traced(grid, |_| {})
    }

    /// Advance `grid` by one generation, passing every transition to `on_transition`.
    ///
    /// A grid whose shape differs from the first one advanced is rejected and
    /// left untouched.
    pub fn advance_traced<F>(
        &mut self,
        grid: &mut Grid,
        on_transition: F,
    ) -> Result<StepReport, AutomatonError>
    where
        F: FnMut(&Transition),
    {
        let shape = grid.shape();
        match self.shape {
            Some(expected) if expected != shape => {
                return Err(AutomatonError::ShapeMismatch {
                    expected,
                    got: shape,
                });
            }
            Some(_) => {}
            None => {
                if shape.is_degenerate() {
                    warn!("Grid {shape} has no interior cells; steps only clear the boundary");
                }
                self.shape = Some(shape);
            }
        }

        let mut step = Tally::default();
        match self.scan {
            ScanMode::InPlace => {
                step_in_place(grid, self.probe, &mut self.rng, &mut step, on_transition)
            }
            ScanMode::Snapshot => step_snapshot(
                grid,
                self.probe,
                &mut self.rng,
                &mut step,
                self.pool.as_ref(),
                on_transition,
            ),
        }

        self.tally.absorb(step);
        self.generation += 1;

        debug!(
            "Generation {}: births={} deaths={} (total births={} deaths={})",
            self.generation, step.births, step.deaths, self.tally.births, self.tally.deaths
        );

        Ok(step)
    }

    /// Successful birth events across all generations so far.
    pub fn births(&self) -> u64 {
        self.tally.births
    }

    /// Isolation and overcrowding deaths across all generations so far.
    pub fn deaths(&self) -> u64 {
        self.tally.deaths
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Number of completed `advance` calls.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.scan
    }

    pub fn diagonal_probe(&self) -> DiagonalProbe {
        self.probe
    }

    /// Cumulative births divided by the total cell count X·Y·Z of `grid`.
    ///
    /// Counts birth events, not live cells, so it can exceed 1 on long runs.
    pub fn occupancy_fraction(&self, grid: &Grid) -> f64 {
        let volume = grid.shape().volume();
        if volume == 0 {
            return 0.0;
        }
        self.tally.births as f64 / volume as f64
    }

    /// Snapshot of the counters alongside `grid`.
    pub fn report(&self, grid: &Grid) -> Report {
        Report {
            generation: self.generation,
            births: self.tally.births,
            deaths: self.tally.deaths,
            alive: grid.alive_count(),
            occupancy: self.occupancy_fraction(grid),
        }
    }
}
