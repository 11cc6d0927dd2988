//! Core simulation state and tick machinery.

pub mod constants;
pub mod engine;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use engine::{HuntOutcome, SimulationEngine};
pub use state::{Player, Scene, SimulationState};
pub use tick::{TickEvent, TickResult};
