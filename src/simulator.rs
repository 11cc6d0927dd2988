//! Headless balance simulator.
//!
//! Drives the engine with a simple greedy bot (chase the nearest prey,
//! hunt in range, dig when idle, evolve when affordable) and aggregates
//! economy numbers across runs. No rendering, no IO, just the
//! simulation core at full speed.

use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::engine::{HuntOutcome, SimulationEngine};
use crate::core::state::SimulationState;
use crate::core::tick::TickEvent;
use crate::stages::{stage_def, Stage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub num_runs: u32,
    pub ticks_per_run: u64,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            ticks_per_run: 36_000, // one simulated hour at 100 ms ticks
            seed: None,
        }
    }
}

/// Aggregated results across all runs.
#[derive(Debug, Default)]
pub struct SimReport {
    pub runs: u32,
    pub ticks_per_run: u64,
    pub total_hunts: u64,
    pub total_digs: u64,
    pub total_zaar_balance: f64,
    pub total_last_balance: f64,
    pub stage_counts: [u32; 4],
    pub day_night_flips: u64,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let runs = self.runs.max(1) as f64;
        let minutes = (self.ticks_per_run * TICK_INTERVAL_MS) as f64 / 60_000.0;
        let mut out = String::new();
        out.push_str(&format!("Runs: {} x {:.1} simulated minutes\n", self.runs, minutes));
        out.push_str(&format!("Avg hunts per run:  {:.1}\n", self.total_hunts as f64 / runs));
        out.push_str(&format!("Avg digs per run:   {:.1}\n", self.total_digs as f64 / runs));
        out.push_str(&format!(
            "Avg final balance:  {:.1} zaar, {:.3} LAST\n",
            self.total_zaar_balance / runs,
            self.total_last_balance / runs
        ));
        out.push_str(&format!(
            "Avg day/night flips: {:.1}\n",
            self.day_night_flips as f64 / runs
        ));
        out.push_str("Final stages:\n");
        for stage in Stage::all() {
            out.push_str(&format!(
                "  {:<6} {}\n",
                stage_def(stage).name,
                self.stage_counts[stage as usize]
            ));
        }
        out
    }
}

pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let mut report = SimReport {
        runs: config.num_runs,
        ticks_per_run: config.ticks_per_run,
        ..SimReport::default()
    };

    for run in 0..config.num_runs {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(run as u64));
        let mut engine = SimulationEngine::new(SimulationState::new(0), &mut rng);

        for _ in 0..config.ticks_per_run {
            act(&mut engine);
            let result = engine.tick(TICK_INTERVAL_MS, &mut rng);
            for event in &result.events {
                if matches!(event, TickEvent::DayNightChanged { .. }) {
                    report.day_night_flips += 1;
                }
            }
        }

        let state = engine.state();
        report.total_hunts += state.player.total_hunts;
        report.total_digs += state.player.total_digs;
        report.total_zaar_balance += state.player.wallet.zaar;
        report.total_last_balance += state.player.wallet.last;
        report.stage_counts[state.player.stage as usize] += 1;
    }

    report
}

/// One bot decision per tick: evolve if possible, otherwise chase and
/// hunt the nearest prey, otherwise walk to an undug spot and dig.
fn act(engine: &mut SimulationEngine) {
    if engine.can_evolve() {
        engine.evolve();
        return;
    }
    if engine.state().is_digging() {
        return;
    }

    let (px, py) = (engine.state().player.x, engine.state().player.y);

    let nearest_prey = engine
        .state()
        .prey
        .iter()
        .enumerate()
        .filter_map(|(slot, entry)| entry.as_ref().map(|p| (slot, p)))
        .filter(|(_, p)| !p.caught)
        .map(|(slot, p)| (slot, p.x, p.y, dist(px, py, p.x, p.y)))
        .min_by(|a, b| a.3.total_cmp(&b.3));

    if let Some((slot, x, y, d)) = nearest_prey {
        if matches!(engine.hunt(slot), HuntOutcome::Caught { .. }) {
            return;
        }
        if d > 0.0 {
            engine.move_character((x - px) / d, (y - py) / d);
        }
        return;
    }

    let nearest_spot = engine
        .state()
        .world
        .dig_spots
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.dug)
        .map(|(id, s)| (id, s.x, s.y, dist(px, py, s.x, s.y)))
        .min_by(|a, b| a.3.total_cmp(&b.3));

    if let Some((spot_id, x, y, d)) = nearest_spot {
        if d < 2.0 {
            engine.dig(spot_id);
        } else {
            engine.move_character((x - px) / d, (y - py) / d);
        }
    }
}

fn dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (dx, dy) = (bx - ax, by - ay);
    (dx * dx + dy * dy).sqrt()
}
