//! Boss and attack definitions.

use serde::{Deserialize, Serialize};

/// A single boss attack. Identity is `(boss name, attack name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub damage: f64,
    pub cooldown_ms: f64,
}

impl Attack {
    pub fn new(name: &str, damage: f64, cooldown_ms: f64) -> Self {
        Self {
            name: name.to_string(),
            damage,
            cooldown_ms,
        }
    }
}

/// A boss the player fights. `attacks` is never empty in a valid catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub max_hp: f64,
    pub attacks: Vec<Attack>,
}

impl Boss {
    pub fn new(name: &str, max_hp: f64, attacks: Vec<Attack>) -> Self {
        Self {
            name: name.to_string(),
            max_hp,
            attacks,
        }
    }

    /// Looks up an attack by name.
    pub fn attack(&self, name: &str) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.name == name)
    }
}

/// Returns every boss in progression order.
pub fn all_bosses() -> Vec<Boss> {
    vec![
        Boss::new("Slime", 80.0, vec![Attack::new("Bash", 10.0, 1500.0)]),
        Boss::new("Stump", 100.0, vec![Attack::new("Bash", 15.0, 2000.0)]),
        Boss::new(
            "Goblin",
            120.0,
            vec![
                Attack::new("Punch", 15.0, 2000.0),
                Attack::new("Kick", 25.0, 3000.0),
            ],
        ),
        Boss::new(
            "Hobgoblin",
            150.0,
            vec![
                Attack::new("Punch", 25.0, 2500.0),
                Attack::new("Kick", 35.0, 3500.0),
            ],
        ),
        Boss::new(
            "Demon",
            200.0,
            vec![
                Attack::new("Fireball", 10.0, 1000.0),
                Attack::new("Jab", 15.0, 1500.0),
                Attack::new("Slash", 30.0, 2500.0),
            ],
        ),
    ]
}
