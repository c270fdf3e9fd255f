//! Integration test: saving and resuming a game through the save store

use bossrush::utils::SaveStore;
use bossrush::{all_bosses, BossRush, EngineConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "bossrush-it-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

#[test]
fn test_game_resumes_where_it_was_saved() {
    let store = SaveStore::at(temp_dir("resume")).unwrap();
    let mut game = BossRush::new(EngineConfig::default(), all_bosses()).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..4_000 {
        game.tick(&mut rng);
    }
    store.save(game.expertise(), game.progress()).unwrap();

    let (expertise, progress) = store.load();
    let resumed =
        BossRush::with_state(EngineConfig::default(), all_bosses(), expertise, progress).unwrap();

    assert_eq!(resumed.expertise(), game.expertise());
    assert_eq!(resumed.progress(), game.progress());
    let progression_boss = &all_bosses()[game.progress().current_boss_index];
    assert_eq!(resumed.current_boss().name, progression_boss.name);
    assert_eq!(resumed.combat().player_hp, 100.0);
}

#[test]
fn test_missing_or_corrupt_files_start_fresh() {
    let dir = temp_dir("corrupt");
    let store = SaveStore::at(&dir).unwrap();
    std::fs::write(dir.join("progress.json"), "{ not json").unwrap();

    let (expertise, progress) = store.load();

    assert!(expertise.is_empty());
    assert_eq!(progress.current_boss_index, 0);
    assert_eq!(progress.total_attempts(), 0);
    assert_eq!(store.load_config(), EngineConfig::default());
}
