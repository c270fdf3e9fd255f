//! Progression state machine and append-only attempt log.

use crate::expertise::ExpertiseSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    Died,
    Won,
}

/// Terminal record of one fight. Final HP values may be negative (overkill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub outcome: FightOutcome,
    pub final_player_hp: f64,
    pub final_boss_hp: f64,
    /// Expertise against the boss just fought, in first-observed order
    pub expertise: Vec<ExpertiseSample>,
}

/// Furthest boss reached plus every recorded attempt, keyed by boss name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    pub current_boss_index: usize,
    #[serde(default)]
    pub attempts_by_boss: BTreeMap<String, Vec<Attempt>>,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attempt for `boss_name`. Never overwrites.
    pub fn record_attempt(&mut self, boss_name: &str, attempt: Attempt) {
        self.attempts_by_boss
            .entry(boss_name.to_string())
            .or_default()
            .push(attempt);
    }

    /// Moves to the next boss, saturating at `boss_count - 1`.
    /// Returns true if the index changed.
    pub fn advance_boss(&mut self, boss_count: usize) -> bool {
        let last = boss_count.saturating_sub(1);
        let next = (self.current_boss_index + 1).min(last);
        let advanced = next != self.current_boss_index;
        self.current_boss_index = next;
        advanced
    }

    /// Back to the first boss with no history.
    pub fn reset(&mut self) {
        self.current_boss_index = 0;
        self.attempts_by_boss.clear();
    }

    pub fn attempts_for(&self, boss_name: &str) -> &[Attempt] {
        self.attempts_by_boss
            .get(boss_name)
            .map_or(&[], |attempts| attempts.as_slice())
    }

    pub fn total_attempts(&self) -> usize {
        self.attempts_by_boss.values().map(Vec::len).sum()
    }

    /// Clamps a stored index into range, e.g. after the catalog shrank.
    pub fn clamp_to_catalog(&mut self, boss_count: usize) {
        self.current_boss_index = self.current_boss_index.min(boss_count.saturating_sub(1));
    }
}
