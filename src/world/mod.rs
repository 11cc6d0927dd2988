//! World furniture and its one-time generation.

pub mod generation;
pub mod types;

pub use generation::generate;
pub use types::{DigSpot, Tree, World};
