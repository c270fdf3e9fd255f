//! The running game: catalog, expertise, progress and the live fight.

use super::config::{ConfigError, EngineConfig};
use crate::catalog::{validate_catalog, Boss, CatalogError};
use crate::combat::logic::CombatRng;
use crate::combat::{advance_one_tick, CombatEvent, CombatState, TickContext};
use crate::expertise::{ExpertiseSample, ExpertiseTable};
use crate::progress::{Attempt, ProgressState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BossRushError {
    #[error("no boss at index {index} (catalog has {count})")]
    UnknownBoss { index: usize, count: usize },
    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid boss catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Owns all mutable game state. Only ticks and the two user commands
/// (`select_boss`, `reset_progress`) change it; everything else reads.
#[derive(Debug, Clone)]
pub struct BossRush {
    config: EngineConfig,
    catalog: Vec<Boss>,
    expertise: ExpertiseTable,
    progress: ProgressState,
    combat: CombatState,
    dirty: bool,
}

impl BossRush {
    /// Fresh game: no expertise, first boss.
    pub fn new(config: EngineConfig, catalog: Vec<Boss>) -> Result<Self, BossRushError> {
        Self::with_state(config, catalog, ExpertiseTable::new(), ProgressState::new())
    }

    /// Resumes from loaded state, fighting the progression boss.
    pub fn with_state(
        config: EngineConfig,
        catalog: Vec<Boss>,
        expertise: ExpertiseTable,
        mut progress: ProgressState,
    ) -> Result<Self, BossRushError> {
        config.validate()?;
        validate_catalog(&catalog)?;
        progress.clamp_to_catalog(catalog.len());

        let combat = CombatState::new(catalog[progress.current_boss_index].clone(), &config);
        Ok(Self {
            config,
            catalog,
            expertise,
            progress,
            combat,
            dirty: false,
        })
    }

    /// Runs one tick of the live fight.
    pub fn tick(&mut self, rng: &mut impl CombatRng) -> Vec<CombatEvent> {
        let state = std::mem::take(&mut self.combat);
        let mut ctx = TickContext {
            config: &self.config,
            catalog: &self.catalog,
            expertise: &mut self.expertise,
            progress: &mut self.progress,
        };
        let outcome = advance_one_tick(state, &mut ctx, rng);
        self.combat = outcome.state;

        if outcome.events.iter().any(|e| {
            matches!(
                e,
                CombatEvent::BossAttack { .. } | CombatEvent::FightResolved { .. }
            )
        }) {
            self.dirty = true;
        }
        outcome.events
    }

    /// Restarts the fight against `catalog[index]` without touching progress.
    pub fn select_boss(&mut self, index: usize) -> Result<(), BossRushError> {
        let boss = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(BossRushError::UnknownBoss {
                index,
                count: self.catalog.len(),
            })?;
        tracing::info!(boss = %boss.name, index, "boss selected");
        let log = std::mem::take(&mut self.combat).log;
        self.combat = CombatState::fresh(boss, &self.config, log);
        Ok(())
    }

    /// Forgets all expertise and progress and restarts at the first boss.
    pub fn reset_progress(&mut self) {
        tracing::info!(
            attempts = self.progress.total_attempts(),
            "resetting all progress"
        );
        self.expertise.clear();
        self.progress.reset();
        let log = std::mem::take(&mut self.combat).log;
        self.combat = CombatState::fresh(self.catalog[0].clone(), &self.config, log);
        self.dirty = true;
    }

    /// True if expertise or progress changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Boss] {
        &self.catalog
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn expertise(&self) -> &ExpertiseTable {
        &self.expertise
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// The boss currently being fought (not necessarily the progression boss).
    pub fn current_boss(&self) -> &Boss {
        &self.combat.boss
    }

    /// Catalog index of the boss currently being fought.
    pub fn current_boss_index(&self) -> usize {
        self.catalog
            .iter()
            .position(|b| b.name == self.combat.boss.name)
            .unwrap_or(self.progress.current_boss_index)
    }

    pub fn expertise_for_current_boss(&self) -> Vec<ExpertiseSample> {
        self.expertise.snapshot_for_boss(&self.combat.boss.name)
    }

    pub fn attempts_for_current_boss(&self) -> &[Attempt] {
        self.progress.attempts_for(&self.combat.boss.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_bosses;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> BossRush {
        BossRush::new(EngineConfig::default(), all_bosses()).unwrap()
    }

    #[test]
    fn test_new_game_fights_first_boss() {
        let game = game();
        assert_eq!(game.current_boss().name, "Slime");
        assert_eq!(game.current_boss_index(), 0);
        assert_eq!(game.combat().player_hp, 100.0);
    }

    #[test]
    fn test_with_state_resumes_progression_boss() {
        let progress = ProgressState {
            current_boss_index: 3,
            ..Default::default()
        };
        let game = BossRush::with_state(
            EngineConfig::default(),
            all_bosses(),
            ExpertiseTable::new(),
            progress,
        )
        .unwrap();
        assert_eq!(game.current_boss().name, "Hobgoblin");
    }

    #[test]
    fn test_with_state_clamps_stale_index() {
        let progress = ProgressState {
            current_boss_index: 42,
            ..Default::default()
        };
        let game = BossRush::with_state(
            EngineConfig::default(),
            all_bosses(),
            ExpertiseTable::new(),
            progress,
        )
        .unwrap();
        assert_eq!(game.progress().current_boss_index, 4);
        assert_eq!(game.current_boss().name, "Demon");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            player_damage: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            BossRush::new(config, all_bosses()),
            Err(BossRushError::Config(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            BossRush::new(EngineConfig::default(), vec![]).unwrap_err(),
            BossRushError::Catalog(CatalogError::Empty)
        );
    }

    #[test]
    fn test_select_boss_does_not_touch_progress() {
        let mut game = game();
        game.select_boss(2).unwrap();

        assert_eq!(game.current_boss().name, "Goblin");
        assert_eq!(game.combat().boss_hp, 120.0);
        assert_eq!(game.progress().current_boss_index, 0);
        assert_eq!(game.current_boss_index(), 2);
        assert!(!game.take_dirty());
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let mut game = game();
        assert_eq!(
            game.select_boss(5),
            Err(BossRushError::UnknownBoss { index: 5, count: 5 })
        );
        assert_eq!(game.current_boss().name, "Slime");
    }

    #[test]
    fn test_ticks_mark_dirty_once_boss_attacks() {
        let mut game = game();
        let mut rng = StdRng::seed_from_u64(1);

        // Boss opens after 1000ms; the first ten ticks only count down
        for _ in 0..10 {
            game.tick(&mut rng);
        }
        assert!(!game.take_dirty());

        game.tick(&mut rng);
        assert!(game.take_dirty());
        assert!(!game.take_dirty());
    }

    #[test]
    fn test_reset_progress_clears_everything() {
        let mut game = game();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..3_000 {
            game.tick(&mut rng);
        }
        assert!(!game.expertise().is_empty());
        assert!(game.progress().total_attempts() > 0);

        game.reset_progress();

        assert_eq!(game.progress().current_boss_index, 0);
        assert_eq!(game.progress().total_attempts(), 0);
        assert_eq!(game.expertise().dodge_probability("Slime", "Bash"), 0.0);
        assert_eq!(game.current_boss().name, "Slime");
        assert!(game.take_dirty());
    }
}
