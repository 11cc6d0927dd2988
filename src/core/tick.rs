//! Tick events: what the simulation reports to the outside world.
//!
//! The engine never touches presentation concerns; it emits these plain
//! data events and the rendering/notification layer subscribes. Events
//! are fire-and-forget, no acknowledgment expected.

use crate::daynight::DayNightTransition;
use crate::prey::PreyKind;
use crate::stages::Stage;

/// A single event produced by a tick (or queued by an out-of-band player
/// action and drained on the next tick).
#[derive(Debug, Clone)]
pub enum TickEvent {
    /// A prey appeared in the world.
    PreySpawned { slot: usize, kind: PreyKind },

    /// A caught prey's capture window elapsed and its slot was cleared.
    PreyRemoved { slot: usize },

    /// A hunt succeeded. The prey stays inert in its slot until its
    /// scheduled removal.
    Hunted {
        slot: usize,
        kind: PreyKind,
        zaar_gained: f64,
        last_gained: f64,
        message: String,
    },

    /// A dig started on a spot.
    DigStarted { spot_id: usize, message: String },

    /// Periodic dirt burst while a dig is running. The cadence (one
    /// burst every 200 ms) is part of the action's observable contract.
    DirtParticles { spot_id: usize },

    /// A dig completed and the spot is now permanently dug.
    Dug {
        spot_id: usize,
        reward_zaar: u32,
        message: String,
    },

    /// Accumulated zaar crossed the ratio and was converted.
    ZaarConverted { last_gained: u64, message: String },

    /// The player evolved to the next stage.
    Evolved { new_stage: Stage, message: String },

    /// Day flipped to night or night to day.
    DayNightChanged {
        transition: DayNightTransition,
        message: String,
    },

    /// The predator showed up in the forest.
    PredatorArrived { message: String },

    /// The predator left, either on its own or after a dodge.
    PredatorLeft { message: String },

    /// A successful dodge drove the predator off.
    PredatorDodged { message: String },

    /// A post went up on the lake feed.
    PostPublished { post_id: u64, message: String },

    /// A daily task hit its target.
    TaskCompleted {
        title: &'static str,
        reward_zaar: f64,
        message: String,
    },
}

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events in chronological order.
    pub events: Vec<TickEvent>,

    /// True when a discrete mutating event (hunt, dig, currency change,
    /// evolution, post) happened and the snapshot should be persisted.
    /// The caller owns the actual IO; the tick itself never persists.
    pub save_requested: bool,
}
