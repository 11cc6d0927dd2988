//! The predator that periodically sweeps the forest.
//!
//! While active it freezes prey spawning and scares the cub; it leaves
//! on its own after a fixed stay, or early if a young lion or king
//! dodges it. Hiding in the lake keeps the player safe.

use crate::core::constants::PREDATOR_SPAWN_CHANCE;
use rand::Rng;

/// Outcome of a `dodge` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeOutcome {
    /// The predator was driven off; the dodge reward was credited.
    Dodged,
    /// No predator is around to dodge.
    NoPredator,
    /// The current stage cannot dodge yet.
    CannotDodge,
}

/// Rolls whether the predator shows up on this spawn check.
pub fn rolls_arrival(rng: &mut impl Rng) -> bool {
    rng.random::<f64>() < PREDATOR_SPAWN_CHANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_arrival_rate_is_roughly_thirty_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let trials = 10_000;
        let arrivals = (0..trials).filter(|_| rolls_arrival(&mut rng)).count();
        let rate = arrivals as f64 / trials as f64;
        assert!(
            (0.27..=0.33).contains(&rate),
            "arrival rate {} should be approximately 0.3",
            rate
        );
    }
}
