//! Engine configuration, the game session and the catch-up loop.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod session;

pub use config::{ConfigError, EngineConfig};
pub use constants::*;
pub use game_loop::{BatchReport, CatchUpLoop, Simulation};
pub use session::{BossRush, BossRushError};
