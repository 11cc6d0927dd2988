//! The simulation engine: fixed-cadence tick orchestration plus the
//! out-of-band player actions (hunt, dig, move, evolve, dodge, social).
//!
//! The engine owns a [`SimulationState`] and a virtual-clock scheduler.
//! An external tick source drives [`SimulationEngine::tick`] with the
//! elapsed milliseconds since the previous tick; player actions arrive
//! between ticks, mutate state synchronously and queue their events,
//! which the next tick's [`TickResult`] carries out. Persistence is
//! never implicit: the tick only raises `save_requested` after discrete
//! mutating events, and the caller owns the IO.

use crate::core::constants::{
    DIG_DURATION_MS, DIG_PARTICLE_INTERVAL_MS, DIG_SPOT_COUNT, DODGE_REWARD_ZAAR, ENERGY_MAX,
    ENERGY_REGEN_PER_SECOND, HUNT_ENERGY_COST, POST_REWARD_ZAAR, PREDATOR_CHECK_INTERVAL_MS,
    PREDATOR_DURATION_MS, PREY_REMOVAL_DELAY_MS, PREY_SPAWN_INTERVAL_MS, TREE_COUNT, WORLD_SIZE,
};
use crate::core::scheduler::{ScheduledAction, Scheduler};
use crate::core::state::{Scene, SimulationState};
use crate::core::tick::{TickEvent, TickResult};
use crate::daynight::DayNightTransition;
use crate::digging::{self, ActiveDig, DigOutcome};
use crate::economy::Wallet;
use crate::predator::{self, DodgeOutcome};
use crate::prey::{ai, PreyKind};
use crate::social::{next_post_id, Post};
use crate::stages::stage_def;
use crate::tasks::{self, TaskKind};
use crate::world;
use rand::Rng;

/// Outcome of a `hunt` request. Every failure is a deterministic no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum HuntOutcome {
    /// The prey was caught; rewards are already credited. The prey stays
    /// inert in its slot for the capture window, then gets removed.
    Caught {
        kind: PreyKind,
        zaar_gained: f64,
        last_gained: f64,
    },
    /// The prey is beyond the stage's hunt range.
    TooFar,
    /// Not enough energy for a hunt.
    Exhausted,
    /// Vacant slot, out-of-range id, or a prey already caught.
    Gone,
}

/// The simulation engine. See the module docs for the tick contract.
pub struct SimulationEngine {
    state: SimulationState,
    scheduler: Scheduler,
    /// Virtual clock: the sum of all tick deltas so far.
    now_ms: u64,
    spawn_timer_ms: u64,
    predator_timer_ms: u64,
    /// Events queued by out-of-band actions, drained by the next tick.
    pending: Vec<TickEvent>,
    pending_save: bool,
}

impl SimulationEngine {
    /// Wraps a state (fresh or restored from a snapshot). Generates the
    /// world when the state carries none, and hands out this session's
    /// daily tasks.
    pub fn new(mut state: SimulationState, rng: &mut impl Rng) -> Self {
        if state.world.is_empty() {
            state.world = world::generate(TREE_COUNT, DIG_SPOT_COUNT, WORLD_SIZE, WORLD_SIZE, rng);
        }
        if state.daily_tasks.is_empty() {
            state.daily_tasks = tasks::generate_daily_tasks();
        }

        Self {
            state,
            scheduler: Scheduler::new(),
            now_ms: 0,
            spawn_timer_ms: 0,
            predator_timer_ms: 0,
            pending: Vec::new(),
            pending_save: false,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Consumes the engine, releasing the state for persistence.
    pub fn into_state(self) -> SimulationState {
        self.state
    }

    /// Elapsed virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_day(&self) -> bool {
        self.state.clock.is_day
    }

    // ── Tick ────────────────────────────────────────────────────────

    /// Processes one tick of `delta_ms` elapsed milliseconds.
    ///
    /// Order: queued action events, day/night clock, due scheduled
    /// effects, prey AI, energy regeneration, then the prey and predator
    /// spawn timers. A vacant prey slot is skipped, never an error.
    pub fn tick(&mut self, delta_ms: u64, rng: &mut impl Rng) -> TickResult {
        self.now_ms += delta_ms;

        let mut result = TickResult {
            events: std::mem::take(&mut self.pending),
            save_requested: std::mem::take(&mut self.pending_save),
        };

        if let Some(transition) = self.state.clock.tick(delta_ms) {
            let message = match transition {
                DayNightTransition::Dawn => "\u{2600} The sun rises over the savanna.",
                DayNightTransition::Dusk => "\u{1f319} Night falls. Watch the shadows...",
            };
            result.events.push(TickEvent::DayNightChanged {
                transition,
                message: message.to_string(),
            });
        }

        while let Some(action) = self.scheduler.pop_due(self.now_ms) {
            self.apply_scheduled(action, rng, &mut result);
        }

        let (px, py) = (self.state.player.x, self.state.player.y);
        let fear_distance = self.state.player.stage.fear_distance();
        for slot in self.state.prey.iter_mut().flatten() {
            ai::update_prey(slot, px, py, fear_distance, rng);
        }

        let player = &mut self.state.player;
        player.energy =
            (player.energy + ENERGY_REGEN_PER_SECOND * delta_ms as f64 / 1000.0).min(ENERGY_MAX);

        self.spawn_timer_ms += delta_ms;
        while self.spawn_timer_ms >= PREY_SPAWN_INTERVAL_MS {
            self.spawn_timer_ms -= PREY_SPAWN_INTERVAL_MS;
            if self.spawn_eligible() {
                if let Some(slot) = ai::try_spawn(&mut self.state.prey, rng) {
                    let kind = self.state.prey[slot].as_ref().map(|p| p.kind);
                    if let Some(kind) = kind {
                        result.events.push(TickEvent::PreySpawned { slot, kind });
                    }
                }
            }
        }

        self.predator_timer_ms += delta_ms;
        while self.predator_timer_ms >= PREDATOR_CHECK_INTERVAL_MS {
            self.predator_timer_ms -= PREDATOR_CHECK_INTERVAL_MS;
            if self.state.player.scene == Scene::Forest
                && !self.state.predator_active
                && !self.state.player.in_lake
                && predator::rolls_arrival(rng)
            {
                self.state.predator_active = true;
                self.scheduler.schedule(
                    self.now_ms + PREDATOR_DURATION_MS,
                    ScheduledAction::PredatorLeaves,
                );
                result.events.push(TickEvent::PredatorArrived {
                    message: "\u{26a0} The predator is coming! Hide at the lake!".to_string(),
                });
            }
        }

        result
    }

    fn apply_scheduled(
        &mut self,
        action: ScheduledAction,
        rng: &mut impl Rng,
        result: &mut TickResult,
    ) {
        match action {
            ScheduledAction::RemovePrey { slot } => {
                if let Some(entry) = self.state.prey.get_mut(slot) {
                    // Only the caught occupant is cleared; a slot reused
                    // by a later spawn is left alone.
                    if entry.as_ref().is_some_and(|p| p.caught) {
                        *entry = None;
                        result.events.push(TickEvent::PreyRemoved { slot });
                    }
                }
            }
            ScheduledAction::EmitDigParticles { spot_id } => {
                if self
                    .state
                    .active_dig
                    .as_ref()
                    .is_some_and(|dig| dig.spot_id == spot_id)
                {
                    result.events.push(TickEvent::DirtParticles { spot_id });
                }
            }
            ScheduledAction::CompleteDig { spot_id } => {
                if !self
                    .state
                    .active_dig
                    .as_ref()
                    .is_some_and(|dig| dig.spot_id == spot_id)
                {
                    return;
                }
                self.state.active_dig = None;

                let reward = digging::roll_reward(rng);
                if let Some(spot) = self.state.world.dig_spots.get_mut(spot_id) {
                    spot.dug = true;
                }
                credit_zaar(
                    &mut self.state.player.wallet,
                    reward as f64,
                    &mut result.events,
                );
                self.state.player.total_digs += 1;

                result.events.push(TickEvent::Dug {
                    spot_id,
                    reward_zaar: reward,
                    message: format!("\u{26cf} You dug up {} zaar!", reward),
                });
                result.save_requested = true;
            }
            ScheduledAction::PredatorLeaves => {
                if self.state.predator_active {
                    self.state.predator_active = false;
                    result.events.push(TickEvent::PredatorLeft {
                        message: "\u{2705} The predator is gone. Safe to roam again.".to_string(),
                    });
                }
            }
        }
    }

    fn spawn_eligible(&self) -> bool {
        self.state.player.scene == Scene::Forest && !self.state.predator_active
    }

    /// Spawns one prey immediately, bypassing the spawn timer but not
    /// the population cap. Returns the occupied slot.
    pub fn try_spawn_prey(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let slot = ai::try_spawn(&mut self.state.prey, rng)?;
        if let Some(prey) = &self.state.prey[slot] {
            self.pending.push(TickEvent::PreySpawned {
                slot,
                kind: prey.kind,
            });
        }
        Some(slot)
    }

    // ── Player actions ──────────────────────────────────────────────

    /// Applies a drag delta, scaled by the stage's speed and clamped to
    /// the world's edge margin. The simulation owns the clamp.
    pub fn move_character(&mut self, dx: f64, dy: f64) {
        let speed = stage_def(self.state.player.stage).speed;
        let player = &mut self.state.player;
        player.x = clamp_to_world(player.x + dx * speed);
        player.y = clamp_to_world(player.y + dy * speed);
    }

    /// Resolves a hunt on the prey in `slot`.
    pub fn hunt(&mut self, slot: usize) -> HuntOutcome {
        let (px, py) = (self.state.player.x, self.state.player.y);
        let def = stage_def(self.state.player.stage);

        let Some(entry) = self.state.prey.get_mut(slot) else {
            return HuntOutcome::Gone;
        };
        let Some(prey) = entry.as_mut() else {
            return HuntOutcome::Gone;
        };
        if prey.caught {
            return HuntOutcome::Gone;
        }

        let (dx, dy) = (prey.x - px, prey.y - py);
        if (dx * dx + dy * dy).sqrt() > def.hunt_range {
            return HuntOutcome::TooFar;
        }
        if self.state.player.energy < HUNT_ENERGY_COST {
            return HuntOutcome::Exhausted;
        }

        // Freeze the prey for its capture window.
        prey.caught = true;
        prey.scared = false;
        prey.vx = 0.0;
        prey.vy = 0.0;
        let kind = prey.kind;
        let zaar_gained = (prey.zaar_reward * def.hunt_multiplier).floor();
        let last_gained = prey.last_reward * def.hunt_multiplier;

        self.state.player.energy -= HUNT_ENERGY_COST;
        self.state.player.total_hunts += 1;

        let mut conversions = Vec::new();
        credit_zaar(&mut self.state.player.wallet, zaar_gained, &mut conversions);
        self.state.player.wallet.add_last(last_gained);

        self.pending.push(TickEvent::Hunted {
            slot,
            kind,
            zaar_gained,
            last_gained,
            message: format!(
                "\u{1f3af} Great catch! +{} zaar, +{:.3} LAST",
                zaar_gained, last_gained
            ),
        });
        self.pending.extend(conversions);

        self.scheduler.schedule(
            self.now_ms + PREY_REMOVAL_DELAY_MS,
            ScheduledAction::RemovePrey { slot },
        );

        self.apply_task_progress(TaskKind::HuntPrey, 1);
        self.apply_task_progress(TaskKind::CollectZaar, zaar_gained as u32);
        self.pending_save = true;

        HuntOutcome::Caught {
            kind,
            zaar_gained,
            last_gained,
        }
    }

    /// Starts a dig on `spot_id`. Only one dig can run at a time; a
    /// started dig always runs to completion.
    pub fn dig(&mut self, spot_id: usize) -> DigOutcome {
        if self.state.active_dig.is_some() {
            return DigOutcome::Busy;
        }
        let Some(spot) = self.state.world.dig_spots.get(spot_id) else {
            return DigOutcome::UnknownSpot;
        };
        if spot.dug {
            return DigOutcome::AlreadyDug;
        }

        self.state.active_dig = Some(ActiveDig {
            spot_id,
            started_ms: self.now_ms,
        });

        // Dirt bursts every 200 ms while digging, completion at 3000 ms.
        let bursts = DIG_DURATION_MS / DIG_PARTICLE_INTERVAL_MS;
        for burst in 1..bursts {
            self.scheduler.schedule(
                self.now_ms + burst * DIG_PARTICLE_INTERVAL_MS,
                ScheduledAction::EmitDigParticles { spot_id },
            );
        }
        self.scheduler.schedule(
            self.now_ms + DIG_DURATION_MS,
            ScheduledAction::CompleteDig { spot_id },
        );

        self.pending.push(TickEvent::DigStarted {
            spot_id,
            message: "\u{26cf} Digging...".to_string(),
        });

        DigOutcome::Started
    }

    pub fn can_evolve(&self) -> bool {
        match self.state.player.stage.next() {
            Some(next) => self.state.player.wallet.zaar >= stage_def(next).zaar_required,
            None => false,
        }
    }

    /// Advances to the next stage when the zaar balance allows it.
    /// Returns false (and changes nothing) otherwise.
    pub fn evolve(&mut self) -> bool {
        let Some(next) = self.state.player.stage.next() else {
            return false;
        };
        if self.state.player.wallet.zaar < stage_def(next).zaar_required {
            return false;
        }

        self.state.player.stage = next;
        if next.grants_dodge() {
            self.state.player.can_dodge = true;
        }

        self.pending.push(TickEvent::Evolved {
            new_stage: next,
            message: format!("\u{1f389} You evolved into {}!", stage_def(next).name),
        });
        self.pending_save = true;
        true
    }

    /// Debug/UI control: flips day and night without touching the
    /// elapsed-time model. The natural cycle keeps running underneath.
    pub fn toggle_day_night(&mut self) {
        self.state.clock.toggle();
    }

    /// Attempts to dodge the predator (young lions and kings only).
    pub fn dodge(&mut self) -> DodgeOutcome {
        if !self.state.predator_active {
            return DodgeOutcome::NoPredator;
        }
        if !self.state.player.can_dodge {
            return DodgeOutcome::CannotDodge;
        }

        // The scheduled departure still fires later; it is ignored once
        // the predator is already gone.
        self.state.predator_active = false;

        let mut conversions = Vec::new();
        credit_zaar(
            &mut self.state.player.wallet,
            DODGE_REWARD_ZAAR,
            &mut conversions,
        );
        self.pending.push(TickEvent::PredatorDodged {
            message: "\u{1f3ad} You dodged the predator with style! +30 zaar".to_string(),
        });
        self.pending.push(TickEvent::PredatorLeft {
            message: "\u{2705} The predator is gone. Safe to roam again.".to_string(),
        });
        self.pending.extend(conversions);
        self.pending_save = true;

        DodgeOutcome::Dodged
    }

    /// Switches scenes. Reaching the lake while the predator prowls
    /// shelters the player; leaving the lake drops the shelter.
    pub fn set_scene(&mut self, scene: Scene) {
        self.state.player.scene = scene;
        if scene == Scene::Lake {
            if self.state.predator_active {
                self.state.player.in_lake = true;
            }
        } else {
            self.state.player.in_lake = false;
        }
        self.pending_save = true;
    }

    /// Publishes a post to the lake feed and credits the posting reward.
    /// Returns the new post's id.
    pub fn create_post(&mut self, content: String) -> u64 {
        let id = next_post_id(&self.state.posts);
        let post = Post {
            id,
            stage: self.state.player.stage,
            content,
            likes: 0,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        };
        self.state.posts.insert(0, post);

        let mut conversions = Vec::new();
        credit_zaar(
            &mut self.state.player.wallet,
            POST_REWARD_ZAAR,
            &mut conversions,
        );
        self.pending.push(TickEvent::PostPublished {
            post_id: id,
            message: "\u{2705} Your adventure is on the feed! +10 zaar".to_string(),
        });
        self.pending.extend(conversions);

        self.apply_task_progress(TaskKind::PublishPost, 1);
        self.pending_save = true;
        id
    }

    /// Likes a post. Returns false for an unknown id.
    pub fn like_post(&mut self, post_id: u64) -> bool {
        match self.state.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                post.likes += 1;
                self.pending_save = true;
                true
            }
            None => false,
        }
    }

    fn apply_task_progress(&mut self, kind: TaskKind, amount: u32) {
        if amount == 0 {
            return;
        }
        let completed = tasks::record_progress(&mut self.state.daily_tasks, kind, amount);
        for task in completed {
            let mut conversions = Vec::new();
            credit_zaar(
                &mut self.state.player.wallet,
                task.reward_zaar,
                &mut conversions,
            );
            self.pending.push(TickEvent::TaskCompleted {
                title: task.title,
                reward_zaar: task.reward_zaar,
                message: format!(
                    "\u{2705} Task complete: {} \u{1f381} +{} zaar",
                    task.title, task.reward_zaar
                ),
            });
            self.pending.extend(conversions);
            self.pending_save = true;
        }
    }
}

fn clamp_to_world(value: f64) -> f64 {
    use crate::core::constants::EDGE_MARGIN;
    value.clamp(EDGE_MARGIN, WORLD_SIZE - EDGE_MARGIN)
}

/// Credits zaar through the wallet and queues a conversion notification
/// when whole LAST were gained.
fn credit_zaar(wallet: &mut Wallet, amount: f64, events: &mut Vec<TickEvent>) {
    let gained = wallet.add_zaar(amount);
    if gained > 0 {
        events.push(TickEvent::ZaarConverted {
            last_gained: gained,
            message: format!("\u{1f389} Auto-converted: +{} LAST", gained),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_PREY;
    use crate::prey::Prey;
    use crate::stages::Stage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn test_engine() -> SimulationEngine {
        let mut rng = test_rng();
        SimulationEngine::new(SimulationState::new(0), &mut rng)
    }

    /// Places a prey at a fixed spot and returns its slot id.
    fn place_prey(engine: &mut SimulationEngine, kind: PreyKind, x: f64, y: f64) -> usize {
        engine.state_mut().prey.push(Some(Prey::new(kind, x, y, 0.0, 0.0)));
        engine.state().prey.len() - 1
    }

    #[test]
    fn test_new_engine_generates_world_once() {
        let engine = test_engine();
        assert_eq!(engine.state().world.trees.len(), TREE_COUNT);
        assert_eq!(engine.state().world.dig_spots.len(), DIG_SPOT_COUNT);
        assert_eq!(engine.state().daily_tasks.len(), 3);
    }

    #[test]
    fn test_restored_world_is_not_regenerated() {
        let mut rng = test_rng();
        let engine = test_engine();
        let state = engine.into_state();
        let trees: Vec<_> = state.world.trees.clone();

        let restored = SimulationEngine::new(state, &mut rng);
        assert_eq!(restored.state().world.trees, trees);
    }

    #[test]
    fn test_move_scales_and_clamps() {
        let mut engine = test_engine();
        engine.move_character(10.0, 0.0);
        assert_eq!(engine.state().player.x, 60.0); // cub speed 1.0

        engine.move_character(1000.0, 1000.0);
        assert_eq!(engine.state().player.x, 95.0);
        assert_eq!(engine.state().player.y, 95.0);

        engine.move_character(-1000.0, -1000.0);
        assert_eq!(engine.state().player.x, 5.0);
        assert_eq!(engine.state().player.y, 5.0);
    }

    #[test]
    fn test_hunt_out_of_range_changes_nothing() {
        let mut engine = test_engine();
        let slot = place_prey(&mut engine, PreyKind::Rabbit, 90.0, 90.0);

        let outcome = engine.hunt(slot);

        assert_eq!(outcome, HuntOutcome::TooFar);
        assert_eq!(engine.state().player.total_hunts, 0);
        assert_eq!(engine.state().player.wallet.zaar, 0.0);
        assert_eq!(engine.state().player.wallet.last, 0.0);
        assert_eq!(engine.state().live_prey_count(), 1);
    }

    #[test]
    fn test_hunt_in_range_awards_and_defers_removal() {
        let mut rng = test_rng();
        let mut engine = test_engine();
        let slot = place_prey(&mut engine, PreyKind::Rabbit, 52.0, 50.0);

        let outcome = engine.hunt(slot);
        assert_eq!(
            outcome,
            HuntOutcome::Caught {
                kind: PreyKind::Rabbit,
                zaar_gained: 10.0,
                last_gained: 0.002
            }
        );
        assert_eq!(engine.state().player.total_hunts, 1);
        assert_eq!(engine.state().player.wallet.zaar, 10.0);
        assert_eq!(engine.state().player.wallet.last, 0.002);

        // Still occupying its slot during the capture window.
        let result = engine.tick(PREY_REMOVAL_DELAY_MS - 1, &mut rng);
        assert!(result.save_requested);
        assert_eq!(engine.state().live_prey_count(), 1);

        // The window elapses and the slot is cleared.
        let result = engine.tick(1, &mut rng);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::PreyRemoved { slot: s } if *s == slot)));
        assert_eq!(engine.state().live_prey_count(), 0);
    }

    #[test]
    fn test_hunting_a_caught_prey_is_a_no_op() {
        let mut engine = test_engine();
        let slot = place_prey(&mut engine, PreyKind::Rabbit, 52.0, 50.0);

        assert!(matches!(engine.hunt(slot), HuntOutcome::Caught { .. }));
        let hunts = engine.state().player.total_hunts;
        let zaar = engine.state().player.wallet.zaar;

        assert_eq!(engine.hunt(slot), HuntOutcome::Gone);
        assert_eq!(engine.state().player.total_hunts, hunts);
        assert_eq!(engine.state().player.wallet.zaar, zaar);
    }

    #[test]
    fn test_hunt_vacant_slot_is_a_no_op() {
        let mut engine = test_engine();
        assert_eq!(engine.hunt(0), HuntOutcome::Gone);
        assert_eq!(engine.hunt(999), HuntOutcome::Gone);
    }

    #[test]
    fn test_hunt_without_energy_is_a_no_op() {
        let mut engine = test_engine();
        let slot = place_prey(&mut engine, PreyKind::Rabbit, 52.0, 50.0);
        engine.state_mut().player.energy = HUNT_ENERGY_COST - 1.0;

        assert_eq!(engine.hunt(slot), HuntOutcome::Exhausted);
        assert_eq!(engine.state().player.total_hunts, 0);
    }

    #[test]
    fn test_spawn_cap_holds_under_repeated_spawns() {
        let mut rng = test_rng();
        let mut engine = test_engine();

        let mut spawned = 0;
        for _ in 0..10 {
            if engine.try_spawn_prey(&mut rng).is_some() {
                spawned += 1;
            }
        }
        assert_eq!(spawned, MAX_PREY);
        assert_eq!(engine.state().live_prey_count(), MAX_PREY);
    }

    #[test]
    fn test_evolve_requires_threshold() {
        let mut engine = test_engine();
        assert!(!engine.can_evolve());
        assert!(!engine.evolve());
        assert_eq!(engine.state().player.stage, Stage::Cub);

        engine.state_mut().player.wallet.zaar = 99.0;
        assert!(!engine.evolve());

        engine.state_mut().player.wallet.zaar = 100.0;
        assert!(engine.evolve());
        assert_eq!(engine.state().player.stage, Stage::Teen);
        assert!(!engine.state().player.can_dodge);
    }

    #[test]
    fn test_evolving_to_young_unlocks_dodge() {
        let mut engine = test_engine();
        engine.state_mut().player.stage = Stage::Teen;
        engine.state_mut().player.wallet.zaar = 500.0;

        assert!(engine.evolve());
        assert_eq!(engine.state().player.stage, Stage::Young);
        assert!(engine.state().player.can_dodge);
    }

    #[test]
    fn test_dodge_outcomes() {
        let mut engine = test_engine();
        assert_eq!(engine.dodge(), DodgeOutcome::NoPredator);

        engine.state_mut().predator_active = true;
        assert_eq!(engine.dodge(), DodgeOutcome::CannotDodge);

        engine.state_mut().player.can_dodge = true;
        assert_eq!(engine.dodge(), DodgeOutcome::Dodged);
        assert!(!engine.state().predator_active);
        assert_eq!(engine.state().player.wallet.zaar, DODGE_REWARD_ZAAR);
    }

    #[test]
    fn test_post_awards_and_prepends() {
        let mut engine = test_engine();
        let first = engine.create_post("Caught my first rabbit!".to_string());
        let second = engine.create_post("The night is scary.".to_string());

        assert_ne!(first, second);
        assert_eq!(engine.state().posts[0].id, second);
        // Two posts at +10 each, plus the publish-task reward of +15.
        assert_eq!(engine.state().player.wallet.zaar, 35.0);
        assert!(engine.like_post(first));
        assert!(!engine.like_post(9999));
        assert_eq!(
            engine
                .state()
                .posts
                .iter()
                .find(|p| p.id == first)
                .unwrap()
                .likes,
            1
        );
    }

    #[test]
    fn test_energy_regenerates_toward_max() {
        let mut rng = test_rng();
        let mut engine = test_engine();
        engine.state_mut().player.energy = 50.0;

        engine.tick(2000, &mut rng);
        assert_eq!(engine.state().player.energy, 51.0);

        engine.state_mut().player.energy = ENERGY_MAX - 0.1;
        engine.tick(10_000, &mut rng);
        assert_eq!(engine.state().player.energy, ENERGY_MAX);
    }

    #[test]
    fn test_tick_skips_vacant_slots_without_failing() {
        let mut rng = test_rng();
        let mut engine = test_engine();
        engine.state_mut().prey = vec![None, None, None];

        let result = engine.tick(100, &mut rng);
        assert!(result.events.is_empty());
    }
}
