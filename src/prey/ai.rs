//! Prey flee/wander behavior, movement integration and spawning.

use super::types::{prey_def, Prey, PreyKind};
use crate::core::constants::{
    FLEE_SPEED_FACTOR, MAX_PREY, PREY_SUB_STEP, WANDER_PERTURB_CHANCE, WORLD_SIZE,
};
use rand::Rng;

/// Advances one prey by one tick.
///
/// Two states, re-evaluated every tick:
/// - **Fleeing** while the player is closer than `fear_distance`: velocity
///   is continuously re-aimed away from the player at double base speed.
/// - **Wandering** otherwise: velocity is kept, except for a small random
///   perturbation chance that re-rolls it within base speed on each axis.
///
/// Integration advances by a fixed sub-step per tick, deliberately not
/// scaled by elapsed time; effective speed therefore tracks the achieved
/// tick rate. Axis overflow reflects the velocity component and clamps
/// the position back into the world.
pub fn update_prey(
    prey: &mut Prey,
    player_x: f64,
    player_y: f64,
    fear_distance: f64,
    rng: &mut impl Rng,
) {
    if prey.caught {
        return;
    }

    let base_speed = prey_def(prey.kind).speed;
    let dx = prey.x - player_x;
    let dy = prey.y - player_y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist < fear_distance {
        prey.scared = true;
        if dist > f64::EPSILON {
            prey.vx = dx / dist * base_speed * FLEE_SPEED_FACTOR;
            prey.vy = dy / dist * base_speed * FLEE_SPEED_FACTOR;
        }
    } else {
        prey.scared = false;
        if rng.random::<f64>() < WANDER_PERTURB_CHANCE {
            prey.vx = rng.random_range(-base_speed..base_speed);
            prey.vy = rng.random_range(-base_speed..base_speed);
        }
    }

    prey.x += prey.vx * PREY_SUB_STEP;
    prey.y += prey.vy * PREY_SUB_STEP;

    if prey.x < 0.0 || prey.x > WORLD_SIZE {
        prey.vx = -prey.vx;
        prey.x = prey.x.clamp(0.0, WORLD_SIZE);
    }
    if prey.y < 0.0 || prey.y > WORLD_SIZE {
        prey.vy = -prey.vy;
        prey.y = prey.y.clamp(0.0, WORLD_SIZE);
    }
}

/// Number of occupied slots, caught-but-not-yet-removed prey included.
pub fn live_count(slots: &[Option<Prey>]) -> usize {
    slots.iter().flatten().count()
}

/// Tries to spawn one prey into the slot vector.
///
/// A no-op returning `None` when the population is at the cap. Otherwise
/// picks a uniformly random species from the full table, places it at a
/// uniformly random world position with a random initial velocity within
/// its base speed, and returns the slot index it now occupies. Vacant
/// slots are reused so ids of later spawns stay stable.
pub fn try_spawn(slots: &mut Vec<Option<Prey>>, rng: &mut impl Rng) -> Option<usize> {
    if live_count(slots) >= MAX_PREY {
        return None;
    }

    let kinds = PreyKind::all();
    let kind = kinds[rng.random_range(0..kinds.len())];
    let speed = prey_def(kind).speed;

    let prey = Prey::new(
        kind,
        rng.random_range(0.0..WORLD_SIZE),
        rng.random_range(0.0..WORLD_SIZE),
        rng.random_range(-speed..speed),
        rng.random_range(-speed..speed),
    );

    let slot = match slots.iter().position(|s| s.is_none()) {
        Some(idx) => {
            slots[idx] = Some(prey);
            idx
        }
        None => {
            slots.push(Some(prey));
            slots.len() - 1
        }
    };
    Some(slot)
}
