//! Utility functions shared by the agents

use rand::{SeedableRng, rngs::StdRng};

/// Seeded RNG when a seed is given, otherwise one seeded from the thread RNG.
///
/// # Examples
///
/// ```
/// use gridgames::utils::build_rng;
/// use rand::Rng;
///
/// let a: u64 = build_rng(Some(7)).random();
/// let b: u64 = build_rng(Some(7)).random();
/// assert_eq!(a, b);
/// ```
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
