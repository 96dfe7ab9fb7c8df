//! The twenty-sided die.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a d20: a uniform integer in 1..=20, independent across calls.
pub fn d20(rng: &mut StdRng) -> i32 {
    rng.random_range(1..=20)
}
