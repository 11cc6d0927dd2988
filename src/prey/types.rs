//! Prey species table and live prey entities.

use serde::{Deserialize, Serialize};

/// Roaming prey species. All four can appear regardless of the player's
/// stage; bigger species simply pay better and move faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreyKind {
    Hamster,
    Rabbit,
    Deer,
    Boar,
}

/// Immutable per-species tuning, looked up via [`prey_def`].
#[derive(Debug, Clone, Copy)]
pub struct PreyDef {
    pub icon: &'static str,
    pub zaar_reward: f64,
    pub last_reward: f64,
    /// Base wander speed; fleeing doubles it.
    pub speed: f64,
    /// Body size in world-percentage units (rendering hint).
    pub size: f64,
}

const PREY_DEFS: [PreyDef; 4] = [
    PreyDef {
        icon: "\u{1f439}",
        zaar_reward: 5.0,
        last_reward: 0.001,
        speed: 3.0,
        size: 3.0,
    },
    PreyDef {
        icon: "\u{1f430}",
        zaar_reward: 10.0,
        last_reward: 0.002,
        speed: 4.0,
        size: 3.5,
    },
    PreyDef {
        icon: "\u{1f98c}",
        zaar_reward: 25.0,
        last_reward: 0.005,
        speed: 5.0,
        size: 5.0,
    },
    PreyDef {
        icon: "\u{1f417}",
        zaar_reward: 50.0,
        last_reward: 0.01,
        speed: 6.0,
        size: 4.5,
    },
];

/// Looks up the immutable definition for a prey kind.
pub fn prey_def(kind: PreyKind) -> &'static PreyDef {
    &PREY_DEFS[kind as usize]
}

impl PreyKind {
    pub fn all() -> [PreyKind; 4] {
        [
            PreyKind::Hamster,
            PreyKind::Rabbit,
            PreyKind::Deer,
            PreyKind::Boar,
        ]
    }
}

/// A live prey entity. Its id is the index of the slot it occupies, which
/// stays stable for the entity's whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prey {
    pub kind: PreyKind,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub zaar_reward: f64,
    pub last_reward: f64,
    /// True while fleeing the player.
    pub scared: bool,
    /// Set on a successful hunt. A caught prey is inert: it no longer
    /// moves and cannot be hunted again while it waits for its scheduled
    /// removal.
    pub caught: bool,
}

impl Prey {
    /// Creates a prey of the given kind at a position, copying the
    /// species rewards and size from the definition table.
    pub fn new(kind: PreyKind, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        let def = prey_def(kind);
        Self {
            kind,
            x,
            y,
            vx,
            vy,
            size: def.size,
            zaar_reward: def.zaar_reward,
            last_reward: def.last_reward,
            scared: false,
            caught: false,
        }
    }
}
