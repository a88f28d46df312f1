//! Spawn randomness
//!
//! Every spawned body draws from its own generator, seeded from the session
//! seed and its spawn index, so a body's size and drop position depend only on
//! where it sits in the spawn order and never on frame timing.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio increment; spreads consecutive indices across the seed space
const INDEX_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generator for the `index`-th (0-based) spawn under `seed`
#[inline]
pub fn spawn_rng(seed: u64, index: u32) -> SmallRng {
    SmallRng::seed_from_u64(seed.wrapping_add((index as u64 + 1).wrapping_mul(INDEX_STRIDE)))
}

/// Uniform sample from an inclusive `[min, max]` range.
///
/// Empty, inverted or non-finite ranges collapse to `min`.
#[inline]
pub fn sample_range(rng: &mut SmallRng, range: [f32; 2]) -> f32 {
    let [lo, hi] = range;
    if !(hi > lo) || !(hi - lo).is_finite() {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}

/// Seed for a backdrop mounted without an explicit one
pub fn mount_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u64 ^ (js_sys::Date::now() as u64).rotate_left(32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5EED)
    }
}
