//! Read-only reporting hooks for renderers and statistics consumers.

use std::fmt;

use log::info;
use serde::Serialize;

use crate::automaton::Grid;

/// Counters and occupancy at one point of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Completed `advance` calls; 0 for the raw initial state.
    pub generation: u64,
    /// Cumulative birth events.
    pub births: u64,
    /// Cumulative isolation and overcrowding deaths.
    pub deaths: u64,
    /// Live cells currently in the grid.
    pub alive: usize,
    /// Cumulative births over X·Y·Z.
    pub occupancy: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Surviving cells: {}", self.births)?;
        writeln!(f, "Total cell cull: {}", self.deaths)?;
        write!(f, "Percent of indices occupied: {}", self.occupancy)
    }
}

/// Consumer of grid snapshots and counters, called once per observed generation.
pub trait Observer {
    fn observe(&mut self, grid: &Grid, report: &Report);
}

impl<F> Observer for F
where
    F: FnMut(&Grid, &Report),
{
    fn observe(&mut self, grid: &Grid, report: &Report) {
        self(grid, report)
    }
}

/// Logs every report at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Observer for LogReporter {
    fn observe(&mut self, _grid: &Grid, report: &Report) {
        info!(
            "Generation {}: surviving cells={} total cell cull={} occupied={:.4} alive={}",
            report.generation, report.births, report.deaths, report.occupancy, report.alive
        );
    }
}
