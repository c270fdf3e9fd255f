//! Combat catalog: the ordered list of bosses the player fights through.
//!
//! Catalog order defines progression. The data itself is static and
//! validated once at startup with [`validate_catalog`].

mod data;

pub use data::*;

use crate::expertise::KEY_SEPARATOR;
use thiserror::Error;

/// A configuration-time problem with the boss catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("boss catalog is empty")]
    Empty,
    #[error("boss {boss:?} has non-positive max HP {max_hp}")]
    NonPositiveHp { boss: String, max_hp: f64 },
    #[error("boss {boss:?} has no attacks")]
    NoAttacks { boss: String },
    #[error("attack {boss}/{attack} has non-positive damage {damage}")]
    NonPositiveDamage {
        boss: String,
        attack: String,
        damage: f64,
    },
    #[error("attack {boss}/{attack} has non-positive cooldown {cooldown_ms}ms")]
    NonPositiveCooldown {
        boss: String,
        attack: String,
        cooldown_ms: f64,
    },
    #[error("name {name:?} contains the reserved key separator '/'")]
    ReservedSeparator { name: String },
    #[error("boss name {name:?} appears more than once")]
    DuplicateBoss { name: String },
}

/// Checks the invariants the combat engine relies on.
pub fn validate_catalog(bosses: &[Boss]) -> Result<(), CatalogError> {
    if bosses.is_empty() {
        return Err(CatalogError::Empty);
    }

    for (i, boss) in bosses.iter().enumerate() {
        if boss.name.contains(KEY_SEPARATOR) {
            return Err(CatalogError::ReservedSeparator {
                name: boss.name.clone(),
            });
        }
        if bosses[..i].iter().any(|b| b.name == boss.name) {
            return Err(CatalogError::DuplicateBoss {
                name: boss.name.clone(),
            });
        }
        if boss.max_hp <= 0.0 {
            return Err(CatalogError::NonPositiveHp {
                boss: boss.name.clone(),
                max_hp: boss.max_hp,
            });
        }
        if boss.attacks.is_empty() {
            return Err(CatalogError::NoAttacks {
                boss: boss.name.clone(),
            });
        }
        for attack in &boss.attacks {
            if attack.name.contains(KEY_SEPARATOR) {
                return Err(CatalogError::ReservedSeparator {
                    name: attack.name.clone(),
                });
            }
            if attack.damage <= 0.0 {
                return Err(CatalogError::NonPositiveDamage {
                    boss: boss.name.clone(),
                    attack: attack.name.clone(),
                    damage: attack.damage,
                });
            }
            if attack.cooldown_ms <= 0.0 {
                return Err(CatalogError::NonPositiveCooldown {
                    boss: boss.name.clone(),
                    attack: attack.name.clone(),
                    cooldown_ms: attack.cooldown_ms,
                });
            }
        }
    }

    Ok(())
}
