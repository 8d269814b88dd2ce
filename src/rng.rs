//! Deterministic random sources.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Multiplier separating derived streams of the same base seed.
const STREAM_DERIVATION_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stream index of the initializer's random source.
pub const INITIALIZER_STREAM: u64 = 1;
/// Stream index of the engine's random source.
pub const ENGINE_STREAM: u64 = 2;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Derive an independent RNG stream from a base seed.
pub fn derive_rng(base_seed: u64, stream: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(base_seed.wrapping_add(stream.wrapping_mul(STREAM_DERIVATION_PRIME)))
}
