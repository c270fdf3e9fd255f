//! Engine balance configuration.

use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("expertise_step must not be negative, got {0}")]
    NegativeExpertiseStep(f64),
}

/// Numbers the combat engine runs on. Missing fields in a config file fall
/// back to the compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of one simulation tick
    pub tick_interval_ms: u64,
    pub initial_player_hp: f64,
    pub player_damage: f64,
    pub player_attack_cooldown_ms: f64,
    /// Boss cooldown at the start of every fight
    pub initial_boss_cooldown_ms: f64,
    /// Growth of a dodge probability per observed attack
    pub expertise_step: f64,
    /// Combat log lines kept in memory
    pub max_log_entries: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_player_hp: INITIAL_PLAYER_HP,
            player_damage: PLAYER_DAMAGE,
            player_attack_cooldown_ms: PLAYER_ATTACK_COOLDOWN_MS,
            initial_boss_cooldown_ms: INITIAL_BOSS_COOLDOWN_MS,
            expertise_step: EXPERTISE_STEP,
            max_log_entries: MAX_LOG_ENTRIES,
        }
    }
}

impl EngineConfig {
    pub fn tick_interval_f64(&self) -> f64 {
        self.tick_interval_ms as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tick_interval_ms", self.tick_interval_ms as f64),
            ("initial_player_hp", self.initial_player_hp),
            ("player_damage", self.player_damage),
            ("player_attack_cooldown_ms", self.player_attack_cooldown_ms),
            ("max_log_entries", self.max_log_entries as f64),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        // A fight may open with the boss ready to strike, so zero is fine here
        if self.initial_boss_cooldown_ms < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "initial_boss_cooldown_ms",
                value: self.initial_boss_cooldown_ms,
            });
        }
        if self.expertise_step < 0.0 {
            return Err(ConfigError::NegativeExpertiseStep(self.expertise_step));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = EngineConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "tick_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_step_rejected() {
        let config = EngineConfig {
            expertise_step: -0.01,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeExpertiseStep(-0.01))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"player_damage": 25.0}"#).unwrap();
        assert_eq!(config.player_damage, 25.0);
        assert_eq!(config.tick_interval_ms, TICK_INTERVAL_MS);
        assert_eq!(config.initial_player_hp, INITIAL_PLAYER_HP);
    }
}
