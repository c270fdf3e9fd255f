//! Boss Rush - a timed boss-fight simulator where the player learns to dodge.
//!
//! The player and a boss trade attacks on fixed-length ticks. Each boss
//! attack the player sees raises their dodge chance against that attack.
//! Bosses are fought in catalog order; every finished fight is recorded.

pub mod build_info;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod expertise;
pub mod progress;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use catalog::{all_bosses, Attack, Boss};
pub use combat::{advance_one_tick, CombatEvent, CombatState, TickContext, TickOutcome};
pub use crate::core::{
    BatchReport, BossRush, BossRushError, CatchUpLoop, EngineConfig,
    TICK_INTERVAL_MS,
};
pub use expertise::ExpertiseTable;
pub use progress::{Attempt, FightOutcome, ProgressState};
