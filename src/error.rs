//! Error types for the automaton library.

use thiserror::Error;

use crate::automaton::grid::Shape;

/// Errors raised by grid construction, engine setup and configuration.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// A grid axis was negative, or the lattice exceeds `MAX_CELLS`.
    #[error("invalid grid dimensions {width}x{height}x{depth}")]
    InvalidDimensions { width: i16, height: i16, depth: i16 },

    /// Initial occupancy probability outside [0, 1].
    #[error("initial density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    /// The engine was handed a grid of a different shape than it first advanced.
    #[error("grid shape changed: engine latched {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    /// Worker count of zero.
    #[error("thread count must be at least 1")]
    InvalidThreads,

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
