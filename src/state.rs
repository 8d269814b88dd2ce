//! Opaque handle state shared with C hosts.

use rand_chacha::ChaCha12Rng;

use crate::automaton::Grid;
use crate::engine::Engine;
use crate::rng::{derive_rng, ENGINE_STREAM, INITIALIZER_STREAM};

/// A grid together with the engine that advances it and the random source
/// used to seed it.
pub struct State {
    pub grid: Grid,
    pub engine: Engine,
    pub seed_rng: ChaCha12Rng,
    /// Base seed, kept so a new grid can restart the engine streams.
    pub seed: u64,
}

impl State {
    /// Empty 0x0x0 grid with fresh engine and initializer streams.
    pub fn new(seed: u64) -> Self {
        State {
            grid: Grid::empty(),
            engine: Engine::from_rng(derive_rng(seed, ENGINE_STREAM)),
            seed_rng: derive_rng(seed, INITIALIZER_STREAM),
            seed,
        }
    }

    /// Replace the grid and restart the engine, which latches the new shape.
    pub fn reset_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.engine = Engine::from_rng(derive_rng(self.seed, ENGINE_STREAM));
        self.seed_rng = derive_rng(self.seed, INITIALIZER_STREAM);
    }
}
