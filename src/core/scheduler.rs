//! Virtual-clock scheduler for deferred simulation effects.
//!
//! Everything that would otherwise need a wall-clock timer (deferred
//! prey removal, dig completion, dirt particle bursts, the predator's
//! departure) is an entry in this due-time priority queue instead. The
//! engine drains due entries on every tick, so tests fast-forward by
//! simply ticking with large deltas.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A deferred effect, applied by the engine when its due time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Clear the prey slot after the capture-animation window.
    RemovePrey { slot: usize },
    /// Emit one dirt particle burst of the running dig.
    EmitDigParticles { spot_id: usize },
    /// Finish the running dig: roll the reward, mark the spot dug.
    CompleteDig { spot_id: usize },
    /// The predator gives up and leaves.
    PredatorLeaves,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    due_ms: u64,
    seq: u64,
    action: ScheduledAction,
}

// BinaryHeap is a max-heap; order entries by reversed due time (ties
// broken by insertion order) to pop the earliest first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Due-time priority queue keyed on the engine's virtual clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire once `now >= due_ms`.
    pub fn schedule(&mut self, due_ms: u64, action: ScheduledAction) {
        self.seq += 1;
        self.heap.push(Entry {
            due_ms,
            seq: self.seq,
            action,
        });
    }

    /// Pops the earliest action that is due at `now_ms`, if any.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledAction> {
        if self.heap.peek().is_some_and(|e| e.due_ms <= now_ms) {
            self.heap.pop().map(|e| e.action)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_its_time() {
        let mut sched = Scheduler::new();
        sched.schedule(500, ScheduledAction::PredatorLeaves);
        assert_eq!(sched.pop_due(499), None);
        assert_eq!(sched.pop_due(500), Some(ScheduledAction::PredatorLeaves));
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut sched = Scheduler::new();
        sched.schedule(300, ScheduledAction::CompleteDig { spot_id: 1 });
        sched.schedule(100, ScheduledAction::EmitDigParticles { spot_id: 1 });
        sched.schedule(200, ScheduledAction::EmitDigParticles { spot_id: 1 });

        assert_eq!(
            sched.pop_due(1000),
            Some(ScheduledAction::EmitDigParticles { spot_id: 1 })
        );
        assert_eq!(
            sched.pop_due(1000),
            Some(ScheduledAction::EmitDigParticles { spot_id: 1 })
        );
        assert_eq!(
            sched.pop_due(1000),
            Some(ScheduledAction::CompleteDig { spot_id: 1 })
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut sched = Scheduler::new();
        sched.schedule(100, ScheduledAction::RemovePrey { slot: 0 });
        sched.schedule(100, ScheduledAction::RemovePrey { slot: 1 });
        assert_eq!(
            sched.pop_due(100),
            Some(ScheduledAction::RemovePrey { slot: 0 })
        );
        assert_eq!(
            sched.pop_due(100),
            Some(ScheduledAction::RemovePrey { slot: 1 })
        );
    }

    #[test]
    fn test_partial_drain_leaves_future_entries() {
        let mut sched = Scheduler::new();
        sched.schedule(100, ScheduledAction::RemovePrey { slot: 0 });
        sched.schedule(900, ScheduledAction::PredatorLeaves);

        assert!(sched.pop_due(100).is_some());
        assert_eq!(sched.pop_due(100), None);
        assert_eq!(sched.len(), 1);
    }
}
