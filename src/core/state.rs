//! The persistable simulation state and the player within it.

use crate::core::constants::{ENERGY_MAX, WORLD_SIZE};
use crate::digging::ActiveDig;
use crate::economy::Wallet;
use crate::prey::Prey;
use crate::social::Post;
use crate::stages::Stage;
use crate::tasks::DailyTask;
use crate::world::World;
use serde::{Deserialize, Serialize};

/// Where the player currently is. The forest is where hunting and
/// digging happen; the lake is the social feed (and predator shelter);
/// the academy shows the daily tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Forest,
    Lake,
    Academy,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::Forest
    }
}

/// The lion cub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub session_id: String,
    /// World-percentage coordinates, clamped to the edge margin.
    pub x: f64,
    pub y: f64,
    pub stage: Stage,
    pub wallet: Wallet,
    #[serde(default = "default_energy")]
    pub energy: f64,
    pub total_hunts: u64,
    pub total_digs: u64,
    #[serde(default)]
    pub scene: Scene,
    /// Sheltered from the predator while true.
    #[serde(default)]
    pub in_lake: bool,
    /// Unlocked when evolving to Young or King.
    #[serde(default)]
    pub can_dodge: bool,
}

fn default_energy() -> f64 {
    ENERGY_MAX
}

impl Player {
    fn new() -> Self {
        use uuid::Uuid;

        Self {
            session_id: Uuid::new_v4().to_string(),
            x: WORLD_SIZE / 2.0,
            y: WORLD_SIZE / 2.0,
            stage: Stage::Cub,
            wallet: Wallet::default(),
            energy: ENERGY_MAX,
            total_hunts: 0,
            total_digs: 0,
            scene: Scene::Forest,
            in_lake: false,
            can_dodge: false,
        }
    }
}

/// Full simulation state: the persistence snapshot plus the transient
/// per-session fields that are rebuilt on load.
///
/// No ambient global anywhere; a [`crate::SimulationEngine`] owns one of
/// these, and several engines can coexist (tests do exactly that).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub player: Player,
    /// Trees and dig spots. Generated once; an empty world in a restored
    /// snapshot triggers regeneration.
    #[serde(default)]
    pub world: World,
    /// Social feed, newest first.
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub clock: crate::daynight::DayNightClock,
    pub last_save_time: i64,
    /// Live prey slots. `None` marks a vacant slot left behind by a
    /// removed prey; indices are the stable prey ids. Transient.
    #[serde(skip)]
    pub prey: Vec<Option<Prey>>,
    /// The dig in progress, if any. Transient on purpose: a session that
    /// ends mid-dig must leave the spot undug.
    #[serde(skip)]
    pub active_dig: Option<ActiveDig>,
    /// Predator presence. Transient.
    #[serde(skip)]
    pub predator_active: bool,
    /// Regenerated every session, never saved.
    #[serde(skip)]
    pub daily_tasks: Vec<DailyTask>,
}

impl SimulationState {
    /// Creates a fresh state with an empty world; the engine generates
    /// the world on construction.
    pub fn new(current_time: i64) -> Self {
        Self {
            player: Player::new(),
            world: World::default(),
            posts: Vec::new(),
            clock: crate::daynight::DayNightClock::default(),
            last_save_time: current_time,
            prey: Vec::new(),
            active_dig: None,
            predator_active: false,
            daily_tasks: Vec::new(),
        }
    }

    /// Number of occupied prey slots (caught-but-pending ones included).
    pub fn live_prey_count(&self) -> usize {
        crate::prey::ai::live_count(&self.prey)
    }

    pub fn is_digging(&self) -> bool {
        self.active_dig.is_some()
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(0)
    }
}
