//! RNG construction using PCG32.
//!
//! All randomness in the synthesis path flows through this module. The
//! default path draws a seed from process entropy; an explicit seed pins
//! the generated sequence for reproducible output and tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Draws a fresh seed from the process-wide entropy source.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}
