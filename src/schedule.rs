use chrono::{Duration, Local};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::MorphError;
use crate::weighted::{select, weighted_bool};

/// Task-scheduler configuration bundle, built fresh per call.
///
/// Hidden/idle values are deliberately not part of the default bundle; the
/// common path stays minimal and unremarkable. Callers that need them use
/// [`hidden`] and [`idle_settings`] directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// `YYYY-MM-DDTHH:MM:SS.fffffff`
    pub start_boundary: String,
    /// Recurrence in days, 1..=7.
    pub days_interval: u32,
    /// ISO-8601-style duration code, e.g. `PT4H`.
    pub execution_time_limit: String,
    /// Scheduler priority, 4..=8.
    pub priority: u8,
}

/// Idle-behavior flag pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IdleSettings {
    pub stop_on_idle_end: bool,
    pub restart_on_idle: bool,
}

// Daily and weekly recurrence dominate real task registrations.
const DAYS_INTERVALS: &[(u32, u32)] = &[
    (1, 50),
    (2, 10),
    (3, 5),
    (4, 5),
    (5, 5),
    (6, 10),
    (7, 15),
];

// Concentrated on "normal" scheduler priority.
const PRIORITIES: &[(u8, u32)] = &[(4, 25), (5, 30), (6, 25), (7, 15), (8, 5)];

const TIME_LIMITS: &[&str] = &[
    "PT1H", "PT2H", "PT4H", "PT8H", "PT12H", "P1D", "P2D", "P3D", "P7D",
];

/// Start time within the past 24 hours, second precision plus a synthetic
/// 7-digit sub-second component so the timestamp never looks round.
pub fn start_boundary(rng: &mut dyn RngCore) -> String {
    let shift = Duration::hours(rng.gen_range(0..24))
        + Duration::minutes(rng.gen_range(0..60))
        + Duration::seconds(rng.gen_range(0..60));
    let start = Local::now() - shift;
    let subsec: u32 = rng.gen_range(1_000_000..=9_999_999);
    format!("{}.{}", start.format("%Y-%m-%dT%H:%M:%S"), subsec)
}

/// Recurrence interval in days, 1..=7.
pub fn days_interval(rng: &mut dyn RngCore) -> Result<u32, MorphError> {
    select(rng, DAYS_INTERVALS, true).copied()
}

/// Execution time limit as a duration code.
pub fn execution_time_limit(rng: &mut dyn RngCore) -> &'static str {
    TIME_LIMITS[rng.gen_range(0..TIME_LIMITS.len())]
}

/// Scheduler priority, 4..=8.
pub fn priority(rng: &mut dyn RngCore) -> Result<u8, MorphError> {
    select(rng, PRIORITIES, true).copied()
}

/// Hidden-task flag, biased toward hidden.
pub fn hidden(rng: &mut dyn RngCore) -> Result<bool, MorphError> {
    weighted_bool(rng, 70, 30)
}

/// Idle-behavior flags, each drawn independently.
pub fn idle_settings(rng: &mut dyn RngCore) -> Result<IdleSettings, MorphError> {
    Ok(IdleSettings {
        stop_on_idle_end: weighted_bool(rng, 20, 80)?,
        restart_on_idle: weighted_bool(rng, 15, 85)?,
    })
}

/// Assemble the default configuration bundle.
pub fn generate_all(rng: &mut dyn RngCore) -> Result<TaskConfig, MorphError> {
    Ok(TaskConfig {
        start_boundary: start_boundary(rng),
        days_interval: days_interval(rng)?,
        execution_time_limit: execution_time_limit(rng).to_string(),
        priority: priority(rng)?,
    })
}
