use crate::catalog::Boss;
use crate::core::config::EngineConfig;
use crate::progress::Attempt;
use std::collections::VecDeque;

/// Bounded combat log that still counts every line ever written, so
/// observers can tell whether it grew even once old lines fall off.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatLog {
    entries: VecDeque<String>,
    total_written: u64,
    capacity: usize,
}

impl Default for CombatLog {
    fn default() -> Self {
        Self::new(crate::core::constants::MAX_LOG_ENTRIES)
    }
}

impl CombatLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            total_written: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
        self.total_written += 1;
    }

    /// Number of lines ever written, including evicted ones.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Live state of one fight.
///
/// During a fight both HP values stay positive; they only reach zero or below
/// on the tick that resolves it, and that tick hands back a fresh state.
/// `Default` is only a placeholder while a tick owns the real value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatState {
    pub player_hp: f64,
    pub player_cooldown_ms: f64,
    pub boss: Boss,
    pub boss_hp: f64,
    pub boss_cooldown_ms: f64,
    pub log: CombatLog,
}

impl CombatState {
    /// Full HP and starting cooldowns against `boss`, with an empty log.
    pub fn new(boss: Boss, config: &EngineConfig) -> Self {
        Self::fresh(boss, config, CombatLog::new(config.max_log_entries))
    }

    /// Full HP and starting cooldowns against `boss`, keeping `log`.
    pub fn fresh(boss: Boss, config: &EngineConfig, log: CombatLog) -> Self {
        Self {
            player_hp: config.initial_player_hp,
            player_cooldown_ms: config.player_attack_cooldown_ms,
            boss_hp: boss.max_hp,
            boss,
            boss_cooldown_ms: config.initial_boss_cooldown_ms,
            log,
        }
    }

    pub fn is_player_dead(&self) -> bool {
        self.player_hp <= 0.0
    }

    pub fn is_boss_dead(&self) -> bool {
        self.boss_hp <= 0.0
    }

    /// Player HP as a 0..=1 ratio for gauges.
    pub fn player_hp_ratio(&self, max_hp: f64) -> f64 {
        (self.player_hp / max_hp).clamp(0.0, 1.0)
    }

    pub fn boss_hp_ratio(&self) -> f64 {
        (self.boss_hp / self.boss.max_hp).clamp(0.0, 1.0)
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    BossAttack {
        attack: String,
        damage: f64,
        dodged: bool,
        /// Dodge probability the roll was made against
        dodge_probability: f64,
    },
    PlayerAttack {
        damage: f64,
    },
    /// The fight ended and an attempt was recorded for `boss_name`.
    FightResolved {
        boss_name: String,
        attempt: Attempt,
    },
    /// Progression moved to the boss at `new_index`.
    BossAdvanced {
        new_index: usize,
    },
}
