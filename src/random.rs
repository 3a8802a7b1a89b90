//! Random number sources.
//!
//! Every generator in [`crate::sampling`] draws from an injected
//! [`rand::Rng`]. This module builds the two sources the crate uses: a
//! seeded generator for reproducible runs and tests, and an OS-seeded one
//! for interactive sessions.
//!
//! # Reproducibility
//!
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use frontier_dist::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating-system entropy.
pub fn system_rng() -> SmallRng {
    SmallRng::from_os_rng()
}

/// Uniform draw on `[0, 1)`, the primitive every sampler is built on.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform draw on `(0, 1]`, safe to pass to `ln` and negative powers.
#[inline]
pub fn uniform_open0<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.random::<f64>()
}
