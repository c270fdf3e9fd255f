//! Simulation configuration.

use crate::core::EngineConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Tick budget per game before it counts as timed out
    pub max_ticks_per_run: u64,

    /// Balance numbers the games run with
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            // Ten hours of game time at 100ms ticks
            max_ticks_per_run: 360_000,
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded config for smoke tests
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 20_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
