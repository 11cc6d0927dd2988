//! The timed digging action.
//!
//! Exactly one dig can run at a time. A dig never cancels and never
//! commits anything before completion: the reward roll, the counter
//! bump and the permanent `dug` flag all happen when the timer fires,
//! so a session that ends mid-dig leaves the spot untouched and the
//! retry after reload is idempotent.

use crate::core::constants::{DIG_REWARD_MAX, DIG_REWARD_MIN};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The dig currently in progress. Transient: never persisted, which is
/// what makes a lost dig harmless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveDig {
    pub spot_id: usize,
    pub started_ms: u64,
}

/// Outcome of a `dig` request. Failures are silent no-ops carrying just
/// enough context for an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// The dig started; completion arrives as a tick event.
    Started,
    /// Another dig is already in progress.
    Busy,
    /// The spot was already dug in this or an earlier session.
    AlreadyDug,
    /// No spot with that id exists.
    UnknownSpot,
}

/// Rolls the dig reward: a uniform integer in `[DIG_REWARD_MIN,
/// DIG_REWARD_MAX)`, so the observable values are exactly 2 through 7.
pub fn roll_reward(rng: &mut impl Rng) -> u32 {
    rng.random_range(DIG_REWARD_MIN..DIG_REWARD_MAX)
}
