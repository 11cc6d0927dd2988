//! Lion Cub - Savanna Life Simulation Core
//!
//! The real-time simulation behind a casual lion-cub game: a fixed-tick
//! engine driving prey AI, hunting, digging, a day/night cycle and a
//! zaar/LAST economy, with a checksummed local snapshot for
//! persistence. Rendering and input are the caller's problem; this
//! library emits events and answers action requests.

pub mod build_info;
pub mod core;
pub mod daynight;
pub mod digging;
pub mod economy;
pub mod predator;
pub mod prey;
pub mod save_manager;
pub mod simulator;
pub mod social;
pub mod stages;
pub mod tasks;
pub mod world;

pub use crate::core::{HuntOutcome, Scene, SimulationEngine, SimulationState, TickEvent, TickResult};
pub use save_manager::SaveManager;
