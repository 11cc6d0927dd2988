//! Per-session daily tasks.
//!
//! Regenerated on every session start, never persisted; completing one
//! pays a zaar reward through the economy.

/// What a task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    HuntPrey,
    CollectZaar,
    PublishPost,
}

#[derive(Debug, Clone)]
pub struct DailyTask {
    pub kind: TaskKind,
    pub title: &'static str,
    pub progress: u32,
    pub target: u32,
    pub reward_zaar: f64,
    pub completed: bool,
}

/// The fixed task set handed out each session.
pub fn generate_daily_tasks() -> Vec<DailyTask> {
    vec![
        DailyTask {
            kind: TaskKind::HuntPrey,
            title: "Hunt 5 prey",
            progress: 0,
            target: 5,
            reward_zaar: 20.0,
            completed: false,
        },
        DailyTask {
            kind: TaskKind::CollectZaar,
            title: "Collect 50 zaar",
            progress: 0,
            target: 50,
            reward_zaar: 10.0,
            completed: false,
        },
        DailyTask {
            kind: TaskKind::PublishPost,
            title: "Share a post at the lake",
            progress: 0,
            target: 1,
            reward_zaar: 15.0,
            completed: false,
        },
    ]
}

/// Advances every open task of `kind` by `amount`, capping progress at
/// the target. Returns the tasks that completed on this call so the
/// caller can credit their rewards and announce them.
pub fn record_progress(tasks: &mut [DailyTask], kind: TaskKind, amount: u32) -> Vec<DailyTask> {
    let mut completed = Vec::new();
    for task in tasks.iter_mut() {
        if task.kind != kind || task.completed {
            continue;
        }
        task.progress = (task.progress + amount).min(task.target);
        if task.progress >= task.target {
            task.completed = true;
            completed.push(task.clone());
        }
    }
    completed
}
