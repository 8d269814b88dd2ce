//! Simulation configuration.
//!
//! Every field has a default matching the reference 25³ run, so a config
//! file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::automaton::{DiagonalProbe, ScanMode, Shape, DEFAULT_DENSITY};
use crate::error::AutomatonError;

/// Edge length of the reference lattice.
pub const DEFAULT_EDGE: i16 = 25;
/// Generations advanced by the reference driver run.
pub const DEFAULT_GENERATIONS: u32 = 9;

/// Engine behavior switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Interior scan strategy.
    pub scan: ScanMode,
    /// How diagonal neighbor states are sampled.
    pub diagonal_probe: DiagonalProbe,
    /// Worker threads for snapshot classification. Ignored by in-place scans.
    pub threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            scan: ScanMode::InPlace,
            diagonal_probe: DiagonalProbe::Paired,
            threads: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: i16,
    pub height: i16,
    pub depth: i16,
    /// Probability that a cell starts alive.
    pub initial_density: f64,
    /// Number of `advance` calls after the initial observation.
    pub generations: u32,
    /// Base seed for the initializer and engine streams. None draws one from entropy.
    pub seed: Option<u64>,
    pub engine: EngineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: DEFAULT_EDGE,
            height: DEFAULT_EDGE,
            depth: DEFAULT_EDGE,
            initial_density: DEFAULT_DENSITY,
            generations: DEFAULT_GENERATIONS,
            seed: None,
            engine: EngineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        self.shape().validate()?;
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(AutomatonError::InvalidDensity(self.initial_density));
        }
        if self.engine.threads == 0 {
            return Err(AutomatonError::InvalidThreads);
        }
        Ok(())
    }

    pub fn shape(&self) -> Shape {
        Shape {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    /// Load and validate a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AutomatonError> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config as pretty-printed JSON.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AutomatonError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
