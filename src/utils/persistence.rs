//! JSON persistence for expertise and progress under ~/.bossrush/.
//!
//! Missing or unreadable files load as defaults so a first run (or a
//! corrupted save) simply starts a new game.

use crate::core::constants::{CONFIG_FILE, EXPERTISE_FILE, PROGRESS_FILE, SAVE_DIR_NAME};
use crate::core::EngineConfig;
use crate::expertise::ExpertiseTable;
use crate::progress::ProgressState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.bossrush/ directory path, creating it if needed.
pub fn bossrush_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "could not read save file");
            }
            return T::default();
        }
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "invalid save file, using defaults");
        T::default()
    })
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    // Write-then-rename so a crash mid-save never leaves a truncated file
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Directory holding the save files.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Store under ~/.bossrush/.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: bossrush_dir()?,
        })
    }

    /// Store under an arbitrary directory, created if needed.
    pub fn at(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads expertise and progress, defaulting whatever is missing.
    pub fn load(&self) -> (ExpertiseTable, ProgressState) {
        let expertise = load_json_or_default(&self.dir.join(EXPERTISE_FILE));
        let progress = load_json_or_default(&self.dir.join(PROGRESS_FILE));
        (expertise, progress)
    }

    pub fn save(&self, expertise: &ExpertiseTable, progress: &ProgressState) -> io::Result<()> {
        save_json(&self.dir.join(EXPERTISE_FILE), expertise)?;
        save_json(&self.dir.join(PROGRESS_FILE), progress)?;
        Ok(())
    }

    /// Engine config from config.json, or defaults.
    pub fn load_config(&self) -> EngineConfig {
        load_json_or_default(&self.dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{Attempt, FightOutcome};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_store() -> SaveStore {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "bossrush-persistence-test-{}-{}",
            std::process::id(),
            id
        ));
        fs::remove_dir_all(&dir).ok();
        SaveStore::at(dir).expect("temp dir should be creatable")
    }

    #[test]
    fn test_empty_dir_loads_defaults() {
        let store = temp_store();
        let (expertise, progress) = store.load();
        assert!(expertise.is_empty());
        assert_eq!(progress, ProgressState::default());
        assert_eq!(store.load_config(), EngineConfig::default());
        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store();
        let mut expertise = ExpertiseTable::new();
        expertise.observe("Goblin", "Kick");
        expertise.observe("Goblin", "Punch");
        let mut progress = ProgressState::new();
        progress.advance_boss(5);
        progress.record_attempt(
            "Slime",
            Attempt {
                outcome: FightOutcome::Won,
                final_player_hp: 30.0,
                final_boss_hp: -10.0,
                expertise: expertise.snapshot_for_boss("Slime"),
            },
        );

        store.save(&expertise, &progress).expect("save should succeed");
        let (loaded_expertise, loaded_progress) = store.load();

        assert_eq!(loaded_expertise, expertise);
        assert_eq!(loaded_progress, progress);
        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let store = temp_store();
        fs::write(store.dir().join(PROGRESS_FILE), "{ not json").unwrap();

        let (_, progress) = store.load();
        assert_eq!(progress, ProgressState::default());
        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_partial_config_file() {
        let store = temp_store();
        fs::write(store.dir().join(CONFIG_FILE), r#"{"initial_player_hp": 150}"#).unwrap();

        let config = store.load_config();
        assert_eq!(config.initial_player_hp, 150.0);
        assert_eq!(config.player_damage, EngineConfig::default().player_damage);
        fs::remove_dir_all(store.dir()).ok();
    }
}
