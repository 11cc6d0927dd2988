//! Roaming prey: species table, live entities and their behavior.

pub mod ai;
pub mod types;

pub use types::{prey_def, Prey, PreyDef, PreyKind};
