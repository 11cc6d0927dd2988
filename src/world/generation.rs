//! One-time procedural placement of world furniture.

use super::types::{DigSpot, Tree, World};
use rand::Rng;

/// Generates a fresh world: `tree_count` decorative trees and
/// `dig_spot_count` undug spots, all placed uniformly at random within
/// the `width` x `height` bounds.
///
/// Runs exactly once per new game session; a restored snapshot that
/// already carries trees or dig spots skips this entirely.
pub fn generate(
    tree_count: usize,
    dig_spot_count: usize,
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) -> World {
    let trees = (0..tree_count)
        .map(|_| Tree {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
        })
        .collect();

    let dig_spots = (0..dig_spot_count)
        .map(|_| DigSpot {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
            dug: false,
        })
        .collect();

    World { trees, dig_spots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DIG_SPOT_COUNT, TREE_COUNT, WORLD_SIZE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_produces_requested_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let world = generate(TREE_COUNT, DIG_SPOT_COUNT, WORLD_SIZE, WORLD_SIZE, &mut rng);
        assert_eq!(world.trees.len(), TREE_COUNT);
        assert_eq!(world.dig_spots.len(), DIG_SPOT_COUNT);
    }

    #[test]
    fn test_everything_lands_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let world = generate(50, 50, WORLD_SIZE, WORLD_SIZE, &mut rng);
        for tree in &world.trees {
            assert!((0.0..WORLD_SIZE).contains(&tree.x));
            assert!((0.0..WORLD_SIZE).contains(&tree.y));
        }
        for spot in &world.dig_spots {
            assert!((0.0..WORLD_SIZE).contains(&spot.x));
            assert!((0.0..WORLD_SIZE).contains(&spot.y));
        }
    }

    #[test]
    fn test_spots_start_undug() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let world = generate(0, DIG_SPOT_COUNT, WORLD_SIZE, WORLD_SIZE, &mut rng);
        assert!(world.dig_spots.iter().all(|s| !s.dug));
    }

    #[test]
    fn test_empty_world_detection() {
        assert!(World::default().is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let world = generate(1, 0, WORLD_SIZE, WORLD_SIZE, &mut rng);
        assert!(!world.is_empty());
    }
}
