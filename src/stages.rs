//! Growth stages of the cub and the evolution rules between them.

use serde::{Deserialize, Serialize};

/// Growth tier of the player, from newborn cub to king of the savanna.
///
/// Ordering matters: stages only ever advance, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Cub,
    Teen,
    Young,
    King,
}

/// Immutable per-stage tuning, looked up via [`stage_def`].
#[derive(Debug, Clone, Copy)]
pub struct StageDef {
    pub name: &'static str,
    pub icon: &'static str,
    /// Zaar balance required to evolve *into* this stage.
    pub zaar_required: f64,
    /// Multiplier applied to prey rewards on a successful hunt.
    pub hunt_multiplier: f64,
    /// Body size in world-percentage units (rendering hint).
    pub size: f64,
    /// Scale factor applied to raw drag deltas when moving.
    pub speed: f64,
    /// Maximum distance at which a hunt succeeds.
    pub hunt_range: f64,
}

const STAGE_DEFS: [StageDef; 4] = [
    StageDef {
        name: "Little Cub",
        icon: "\u{1f43e}",
        zaar_required: 0.0,
        hunt_multiplier: 1.0,
        size: 4.0,
        speed: 1.0,
        hunt_range: 10.0,
    },
    StageDef {
        name: "Teen Cub",
        icon: "\u{1f981}",
        zaar_required: 100.0,
        hunt_multiplier: 1.5,
        size: 5.0,
        speed: 1.2,
        hunt_range: 12.0,
    },
    StageDef {
        name: "Young Lion",
        icon: "\u{1f981}",
        zaar_required: 500.0,
        hunt_multiplier: 2.0,
        size: 6.0,
        speed: 1.5,
        hunt_range: 15.0,
    },
    StageDef {
        name: "King of the Savanna",
        icon: "\u{1f451}\u{1f981}",
        zaar_required: 1000.0,
        hunt_multiplier: 3.0,
        size: 8.0,
        speed: 2.0,
        hunt_range: 20.0,
    },
];

/// Looks up the immutable definition for a stage.
pub fn stage_def(stage: Stage) -> &'static StageDef {
    &STAGE_DEFS[stage as usize]
}

impl Stage {
    pub fn all() -> [Stage; 4] {
        [Stage::Cub, Stage::Teen, Stage::Young, Stage::King]
    }

    /// The next stage up, or `None` at the top of the ladder.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Cub => Some(Stage::Teen),
            Stage::Teen => Some(Stage::Young),
            Stage::Young => Some(Stage::King),
            Stage::King => None,
        }
    }

    /// Young lions and kings can dodge the predator.
    pub fn grants_dodge(self) -> bool {
        matches!(self, Stage::Young | Stage::King)
    }

    /// Distance below which prey switch from wandering to fleeing.
    pub fn fear_distance(self) -> f64 {
        stage_def(self).hunt_range * crate::core::constants::FEAR_RANGE_FACTOR
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Cub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(Stage::Cub < Stage::Teen);
        assert!(Stage::Teen < Stage::Young);
        assert!(Stage::Young < Stage::King);
    }

    #[test]
    fn test_next_walks_the_ladder() {
        assert_eq!(Stage::Cub.next(), Some(Stage::Teen));
        assert_eq!(Stage::Teen.next(), Some(Stage::Young));
        assert_eq!(Stage::Young.next(), Some(Stage::King));
        assert_eq!(Stage::King.next(), None);
    }

    #[test]
    fn test_evolution_thresholds_increase() {
        let mut prev = -1.0;
        for stage in Stage::all() {
            let required = stage_def(stage).zaar_required;
            assert!(required > prev || stage == Stage::Cub);
            prev = required;
        }
    }

    #[test]
    fn test_dodge_unlocks_at_young() {
        assert!(!Stage::Cub.grants_dodge());
        assert!(!Stage::Teen.grants_dodge());
        assert!(Stage::Young.grants_dodge());
        assert!(Stage::King.grants_dodge());
    }

    #[test]
    fn test_fear_distance_is_half_hunt_range() {
        for stage in Stage::all() {
            assert_eq!(stage.fear_distance(), stage_def(stage).hunt_range * 0.5);
        }
    }

    #[test]
    fn test_base_stage_has_neutral_multiplier() {
        assert_eq!(stage_def(Stage::Cub).hunt_multiplier, 1.0);
    }
}
