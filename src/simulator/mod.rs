//! Headless balance simulator.
//!
//! Plays many independent games from a fresh save, tick by tick, through the
//! same `BossRush` session the terminal game uses, and summarises how long
//! each boss takes to learn and beat.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BossStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
