//! Combat simulation: fight state and the fixed-step tick function.

pub mod logic;
pub mod types;

pub use logic::{advance_one_tick, CombatRng, TickContext, TickOutcome};
pub use types::{CombatEvent, CombatLog, CombatState};
