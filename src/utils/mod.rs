//! Utility modules: save files and logging setup.

pub mod logging;
pub mod persistence;

pub use persistence::SaveStore;
