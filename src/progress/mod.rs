//! Progression and attempt history.

mod recorder;

pub use recorder::{Attempt, FightOutcome, ProgressState};
