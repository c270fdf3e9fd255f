//! Simulation runner driving the real game session.

use super::config::SimConfig;
use super::report::SimReport;
use crate::catalog::all_bosses;
use crate::combat::CombatEvent;
use crate::core::{BossRush, BossRushError};
use crate::progress::FightOutcome;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub total_ticks: u64,
    /// Furthest boss index reached
    pub final_boss_index: usize,
    /// Final boss beaten at least once
    pub cleared_all: bool,
    /// Per catalog boss: finished fights
    pub attempts_per_boss: Vec<u64>,
    /// Per catalog boss: all deaths
    pub deaths_per_boss: Vec<u64>,
    /// Per catalog boss: all wins
    pub wins_per_boss: Vec<u64>,
    /// Per catalog boss: deaths before the first win (or in total if never won)
    pub deaths_before_win: Vec<u64>,
    /// Per catalog boss: tick of the first win
    pub first_win_tick: Vec<Option<u64>>,
    /// Final (attack, dodge probability) pairs for every boss
    pub final_expertise: Vec<(String, f64)>,
}

/// Run the full simulation and return a report.
///
/// Fails up front if the engine config or catalog is invalid.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, BossRushError> {
    let bosses = all_bosses();
    BossRush::new(config.engine.clone(), bosses.clone())?;
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - boss {}/{}, ticks {}, deaths {}",
                run_idx + 1,
                config.num_runs,
                stats.final_boss_index + 1,
                bosses.len(),
                stats.total_ticks,
                stats.deaths_per_boss.iter().sum::<u64>()
            );
        }
        runs.push(stats);
    }

    Ok(SimReport::from_runs(&bosses, runs, config.max_ticks_per_run))
}

/// Plays one game from a fresh save until the last boss falls or the tick
/// budget runs out.
pub fn simulate_single_run(
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) -> Result<RunStats, BossRushError> {
    let bosses = all_bosses();
    let boss_count = bosses.len();
    let mut game = BossRush::new(config.engine.clone(), bosses)?;

    let mut attempts_per_boss = vec![0u64; boss_count];
    let mut deaths_per_boss = vec![0u64; boss_count];
    let mut wins_per_boss = vec![0u64; boss_count];
    let mut deaths_before_win = vec![0u64; boss_count];
    let mut first_win_tick: Vec<Option<u64>> = vec![None; boss_count];
    let mut cleared_all = false;
    let mut tick = 0u64;

    while tick < config.max_ticks_per_run && !cleared_all {
        tick += 1;
        for event in game.tick(rng) {
            let CombatEvent::FightResolved { boss_name, attempt } = event else {
                continue;
            };
            let Some(index) = game.catalog().iter().position(|b| b.name == boss_name) else {
                continue;
            };
            attempts_per_boss[index] += 1;
            match attempt.outcome {
                FightOutcome::Died => {
                    deaths_per_boss[index] += 1;
                    if first_win_tick[index].is_none() {
                        deaths_before_win[index] += 1;
                    }
                }
                FightOutcome::Won => {
                    wins_per_boss[index] += 1;
                    if first_win_tick[index].is_none() {
                        first_win_tick[index] = Some(tick);
                        cleared_all = index + 1 == boss_count;
                    }
                }
            }
        }
    }

    let final_expertise = game
        .expertise()
        .iter()
        .map(|e| (e.key.to_string(), e.dodge_probability))
        .collect();

    Ok(RunStats {
        total_ticks: tick,
        final_boss_index: game.progress().current_boss_index,
        cleared_all,
        attempts_per_boss,
        deaths_per_boss,
        wins_per_boss,
        deaths_before_win,
        first_win_tick,
        final_expertise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_run() {
        let config = SimConfig::quick(11);
        let a = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        let b = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();

        assert_eq!(a.total_ticks, b.total_ticks);
        assert_eq!(a.deaths_per_boss, b.deaths_per_boss);
        assert_eq!(a.final_expertise, b.final_expertise);
    }

    #[test]
    fn test_run_respects_tick_budget() {
        let config = SimConfig {
            max_ticks_per_run: 500,
            ..SimConfig::quick(3)
        };
        let stats = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

        assert!(stats.total_ticks <= 500);
        assert_eq!(stats.deaths_per_boss.len(), 5);
    }

    #[test]
    fn test_overpowered_player_clears_everything() {
        let mut config = SimConfig::quick(5);
        config.engine.player_damage = 1_000.0;
        config.engine.player_attack_cooldown_ms = 100.0;

        let stats = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

        assert!(stats.cleared_all);
        assert_eq!(stats.final_boss_index, 4);
        assert!(stats.first_win_tick.iter().all(Option::is_some));
        assert_eq!(stats.deaths_per_boss.iter().sum::<u64>(), 0);
        assert_eq!(stats.wins_per_boss, vec![1; 5]);
        assert_eq!(stats.attempts_per_boss, stats.wins_per_boss);
    }

    #[test]
    fn test_attempts_split_into_deaths_and_wins() {
        let config = SimConfig::quick(8);
        let stats = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();

        for i in 0..5 {
            assert_eq!(
                stats.attempts_per_boss[i],
                stats.deaths_per_boss[i] + stats.wins_per_boss[i]
            );
            assert!(stats.deaths_before_win[i] <= stats.deaths_per_boss[i]);
        }
        assert!(stats.attempts_per_boss[0] > 0);
    }

    #[test]
    fn test_invalid_engine_config_is_rejected() {
        let mut config = SimConfig::quick(1);
        config.engine.tick_interval_ms = 0;

        assert!(matches!(
            simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(1)),
            Err(BossRushError::Config(_))
        ));
        assert!(run_simulation(&config).is_err());
    }

    #[test]
    fn test_seed_near_max_wraps_instead_of_overflowing() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(u64::MAX),
            max_ticks_per_run: 50,
            ..SimConfig::quick(0)
        };

        let report = run_simulation(&config).unwrap();

        assert_eq!(report.num_runs, 3);
    }
}
