//! Expertise model: learned dodge probability per (boss, attack) pair.
//!
//! Every time a boss attack is thrown at the player, the matching entry grows
//! by a fixed step, whether the attack landed or was dodged. Entries are kept
//! in the order they were first observed so per-boss snapshots line up
//! across attempts.

mod table;

pub use table::{ExpertiseEntry, ExpertiseKey, ExpertiseSample, ExpertiseTable, KEY_SEPARATOR};
