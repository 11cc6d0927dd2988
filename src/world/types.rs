//! Static world furniture: decorative trees and diggable spots.

use serde::{Deserialize, Serialize};

/// Decorative tree. Only its position matters; rendering does the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub x: f64,
    pub y: f64,
}

/// A one-shot currency-yielding location.
///
/// `dug` never resets: once a spot has been dug it is permanently
/// excluded from future digging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigSpot {
    pub x: f64,
    pub y: f64,
    pub dug: bool,
}

/// Everything placed at world creation. Persisted with the snapshot so
/// generation runs exactly once per new game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub trees: Vec<Tree>,
    pub dig_spots: Vec<DigSpot>,
}

impl World {
    /// True when the snapshot carried no generated content, meaning a
    /// fresh world must be generated.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty() && self.dig_spots.is_empty()
    }
}
