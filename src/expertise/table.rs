use crate::core::constants::EXPERTISE_STEP;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separates boss and attack names inside an [`ExpertiseKey`].
/// Catalog validation guarantees neither name contains it.
pub const KEY_SEPARATOR: char = '/';

/// Flat composite key `boss/attack`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertiseKey(String);

impl ExpertiseKey {
    pub fn new(boss_name: &str, attack_name: &str) -> Self {
        Self(format!("{}{}{}", boss_name, KEY_SEPARATOR, attack_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn boss_name(&self) -> &str {
        self.0
            .split_once(KEY_SEPARATOR)
            .map_or(self.0.as_str(), |(boss, _)| boss)
    }

    pub fn attack_name(&self) -> &str {
        self.0
            .split_once(KEY_SEPARATOR)
            .map_or("", |(_, attack)| attack)
    }

    fn belongs_to(&self, boss_name: &str) -> bool {
        self.boss_name() == boss_name
    }
}

impl fmt::Display for ExpertiseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored (key, probability) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseEntry {
    pub key: ExpertiseKey,
    pub dodge_probability: f64,
}

/// One attack's expertise as seen from a single boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseSample {
    pub attack: String,
    pub dodge_probability: f64,
}

/// Process-wide expertise table.
///
/// Values only ever grow; a missing entry reads as 0. There is no upper
/// bound, so after enough exposures a probability can exceed 1.0 and every
/// roll becomes a dodge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertiseTable {
    entries: Vec<ExpertiseEntry>,
}

impl ExpertiseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learned dodge probability, or 0 if the attack was never observed.
    pub fn dodge_probability(&self, boss_name: &str, attack_name: &str) -> f64 {
        let key = ExpertiseKey::new(boss_name, attack_name);
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map_or(0.0, |e| e.dodge_probability)
    }

    /// Records one exposure using the default step. Returns the new value.
    pub fn observe(&mut self, boss_name: &str, attack_name: &str) -> f64 {
        self.observe_by(boss_name, attack_name, EXPERTISE_STEP)
    }

    /// Records one exposure, growing the entry by `step`. Returns the new value.
    pub fn observe_by(&mut self, boss_name: &str, attack_name: &str, step: f64) -> f64 {
        let key = ExpertiseKey::new(boss_name, attack_name);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.dodge_probability += step;
                entry.dodge_probability
            }
            None => {
                self.entries.push(ExpertiseEntry {
                    key,
                    dodge_probability: step,
                });
                step
            }
        }
    }

    /// All entries for `boss_name`, in first-observed order.
    pub fn snapshot_for_boss(&self, boss_name: &str) -> Vec<ExpertiseSample> {
        self.entries
            .iter()
            .filter(|e| e.key.belongs_to(boss_name))
            .map(|e| ExpertiseSample {
                attack: e.key.attack_name().to_string(),
                dodge_probability: e.dodge_probability,
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpertiseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
