// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;

// World geometry (positions are percentages of the world square)
pub const WORLD_SIZE: f64 = 100.0;
pub const EDGE_MARGIN: f64 = 5.0;
pub const TREE_COUNT: usize = 15;
pub const DIG_SPOT_COUNT: usize = 20;

// Currency conversion: every 100 zaar becomes 1 LAST
pub const ZAAR_TO_LAST_RATIO: f64 = 100.0;

// Energy
pub const ENERGY_MAX: f64 = 100.0;
pub const ENERGY_REGEN_PER_SECOND: f64 = 0.5;
pub const HUNT_ENERGY_COST: f64 = 10.0;

// Prey population and movement
pub const MAX_PREY: usize = 8;
pub const PREY_SPAWN_INTERVAL_MS: u64 = 3000;
pub const PREY_SUB_STEP: f64 = 0.1;
pub const WANDER_PERTURB_CHANCE: f64 = 0.02;
pub const FLEE_SPEED_FACTOR: f64 = 2.0;
pub const FEAR_RANGE_FACTOR: f64 = 0.5;
pub const PREY_REMOVAL_DELAY_MS: u64 = 800;

// Digging
pub const DIG_DURATION_MS: u64 = 3000;
pub const DIG_PARTICLE_INTERVAL_MS: u64 = 200;
pub const DIG_REWARD_MIN: u32 = 2;
pub const DIG_REWARD_MAX: u32 = 8;

// Day/night cycle
pub const CYCLE_LENGTH_MS: u64 = 120_000;

// Predator
pub const PREDATOR_CHECK_INTERVAL_MS: u64 = 20_000;
pub const PREDATOR_SPAWN_CHANCE: f64 = 0.3;
pub const PREDATOR_DURATION_MS: u64 = 10_000;
pub const DODGE_REWARD_ZAAR: f64 = 30.0;

// Social lake
pub const POST_REWARD_ZAAR: f64 = 10.0;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x4C43_5542_0000_0002;
