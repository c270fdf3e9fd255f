//! Simulation report generation.

use super::runner::RunStats;
use crate::catalog::Boss;
use crate::expertise::ExpertiseKey;
use serde::Serialize;

/// Per-boss aggregate across all runs.
#[derive(Debug, Clone, Serialize)]
pub struct BossStats {
    pub name: String,
    pub avg_attempts: f64,
    pub avg_deaths: f64,
    pub avg_wins: f64,
    /// Share of runs that beat this boss at least once
    pub clear_rate: f64,
    /// Average deaths before the first win, over runs that won
    pub avg_deaths_before_clear: f64,
    /// Average tick of the first win, over runs that won
    pub avg_first_clear_tick: Option<f64>,
    /// Average final dodge probability per attack, in catalog order
    pub avg_final_expertise: Vec<(String, f64)>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,
    pub avg_total_deaths: f64,
    pub avg_ticks_to_complete: f64,
    pub bosses: Vec<BossStats>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

fn mean_of(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    mean(runs.iter().map(f)).unwrap_or(0.0)
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(bosses: &[Boss], runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.cleared_all).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.cleared_all && r.total_ticks >= max_ticks)
            .count() as u32;

        let avg_total_deaths = mean(
            runs.iter()
                .map(|r| r.deaths_per_boss.iter().sum::<u64>() as f64),
        )
        .unwrap_or(0.0);
        let avg_ticks_to_complete = mean(
            runs.iter()
                .filter(|r| r.cleared_all)
                .map(|r| r.total_ticks as f64),
        )
        .unwrap_or(0.0);

        let bosses = bosses
            .iter()
            .enumerate()
            .map(|(i, boss)| {
                let winners = || runs.iter().filter(move |r| r.first_win_tick[i].is_some());
                let clears = winners().count();

                let avg_final_expertise = boss
                    .attacks
                    .iter()
                    .map(|attack| {
                        let key = ExpertiseKey::new(&boss.name, &attack.name).to_string();
                        let avg = mean(runs.iter().map(|r| {
                            r.final_expertise
                                .iter()
                                .find(|(k, _)| *k == key)
                                .map_or(0.0, |(_, p)| *p)
                        }))
                        .unwrap_or(0.0);
                        (attack.name.clone(), avg)
                    })
                    .collect();

                BossStats {
                    name: boss.name.clone(),
                    avg_attempts: mean_of(&runs, |r| r.attempts_per_boss[i] as f64),
                    avg_deaths: mean_of(&runs, |r| r.deaths_per_boss[i] as f64),
                    avg_wins: mean_of(&runs, |r| r.wins_per_boss[i] as f64),
                    clear_rate: clears as f64 / num_runs.max(1) as f64,
                    avg_deaths_before_clear: mean(
                        winners().map(|r| r.deaths_before_win[i] as f64),
                    )
                    .unwrap_or(0.0),
                    avg_first_clear_tick: mean(
                        winners().filter_map(|r| r.first_win_tick[i].map(|t| t as f64)),
                    ),
                    avg_final_expertise,
                }
            })
            .collect();

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_total_deaths,
            avg_ticks_to_complete,
            bosses,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} cleared every boss, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Total Deaths:    {:.1}\n",
            self.avg_total_deaths
        ));
        report.push_str(&format!(
            "  Avg Ticks to Clear:  {:.0}\n\n",
            self.avg_ticks_to_complete
        ));

        report.push_str("── BOSSES ───────────────────────────────────────────────────────\n");
        for boss in &self.bosses {
            let first_clear = boss
                .avg_first_clear_tick
                .map_or_else(|| "never".to_string(), |t| format!("tick {:.0}", t));
            report.push_str(&format!(
                "  {:<10} {:>5.1}% cleared, {:>5.1} deaths first, {}\n",
                boss.name,
                boss.clear_rate * 100.0,
                boss.avg_deaths_before_clear,
                first_clear
            ));
            report.push_str(&format!(
                "      fights {:.1} (won {:.1}, died {:.1})\n",
                boss.avg_attempts, boss.avg_wins, boss.avg_deaths
            ));
            for (attack, p) in &boss.avg_final_expertise {
                report.push_str(&format!("      {:<10} dodge {:>5.1}%\n", attack, p * 100.0));
            }
        }

        report.push_str("\n── WARNINGS ─────────────────────────────────────────────────────\n");
        let mut warned = false;
        for boss in &self.bosses {
            if boss.clear_rate < 1.0 && self.num_runs > 0 {
                report.push_str(&format!(
                    "  ⚠️  {} not cleared in every run - tick budget too small?\n",
                    boss.name
                ));
                warned = true;
            }
            if boss.avg_final_expertise.iter().any(|(_, p)| *p > 1.0) {
                report.push_str(&format!(
                    "  ⚠️  {} has attacks past 100% dodge\n",
                    boss.name
                ));
                warned = true;
            }
        }
        if !warned {
            report.push_str("  none\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
