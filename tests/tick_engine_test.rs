//! Integration test: one-tick combat engine
//!
//! Drives `advance_one_tick` through whole fights with scripted dice and
//! checks the exact tick each fight ends on.

use bossrush::catalog::{all_bosses, Attack, Boss};
use bossrush::combat::{advance_one_tick, CombatEvent, CombatRng, CombatState, TickContext};
use bossrush::core::constants::{DEATH_MESSAGE, VICTORY_MESSAGE};
use bossrush::{EngineConfig, ExpertiseTable, FightOutcome, ProgressState};

/// Always picks the first attack; the roll never lands under the dodge chance.
struct NeverDodge;

impl CombatRng for NeverDodge {
    fn pick_attack(&mut self, _attack_count: usize) -> usize {
        0
    }

    fn roll(&mut self) -> f64 {
        0.999_999
    }
}

struct World {
    config: EngineConfig,
    catalog: Vec<Boss>,
    expertise: ExpertiseTable,
    progress: ProgressState,
}

impl World {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: all_bosses(),
            expertise: ExpertiseTable::new(),
            progress: ProgressState::new(),
        }
    }

    fn start(&self) -> CombatState {
        CombatState::new(self.catalog[0].clone(), &self.config)
    }

    /// Ticks until a fight resolves; returns the tick number and every event.
    fn fight(&mut self, mut state: CombatState, limit: u32) -> (u32, CombatState, Vec<CombatEvent>) {
        let mut all = Vec::new();
        for tick in 1..=limit {
            let mut ctx = TickContext {
                config: &self.config,
                catalog: &self.catalog,
                expertise: &mut self.expertise,
                progress: &mut self.progress,
            };
            let outcome = advance_one_tick(state, &mut ctx, &mut NeverDodge);
            let done = outcome.resolved().is_some();
            all.extend(outcome.events);
            state = outcome.state;
            if done {
                return (tick, state, all);
            }
        }
        panic!("fight did not resolve within {} ticks", limit);
    }
}

fn count(events: &[CombatEvent], pred: impl Fn(&CombatEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

fn resolved_attempt(events: &[CombatEvent]) -> &bossrush::Attempt {
    events
        .iter()
        .find_map(|e| match e {
            CombatEvent::FightResolved { attempt, .. } => Some(attempt),
            _ => None,
        })
        .expect("fight should have resolved")
}

// =============================================================================
// Slime with default numbers
// =============================================================================

#[test]
fn test_slime_without_dodging_kills_the_player() {
    let mut world = World::new(EngineConfig::default());
    let start = world.start();

    // Slime opens at tick 11 then every 16 ticks; player swings every 21
    let (tick, next, events) = world.fight(start, 1_000);

    assert_eq!(tick, 155);
    assert_eq!(count(&events, |e| matches!(e, CombatEvent::BossAttack { .. })), 10);
    assert_eq!(count(&events, |e| matches!(e, CombatEvent::PlayerAttack { .. })), 7);

    let attempt = resolved_attempt(&events);
    assert_eq!(attempt.outcome, FightOutcome::Died);
    assert_eq!(attempt.final_player_hp, 0.0);
    assert_eq!(attempt.final_boss_hp, 10.0);

    // Lost to the progression boss: the same boss again, at full health
    assert_eq!(next.boss.name, "Slime");
    assert_eq!(next.player_hp, 100.0);
    assert_eq!(next.boss_hp, 80.0);
    assert_eq!(next.log.last(), Some(DEATH_MESSAGE));
    assert_eq!(world.progress.current_boss_index, 0);
    assert_eq!(world.progress.attempts_for("Slime").len(), 1);
}

#[test]
fn test_expertise_grows_once_per_boss_attack() {
    let mut world = World::new(EngineConfig::default());
    let start = world.start();

    world.fight(start, 1_000);

    let p = world.expertise.dodge_probability("Slime", "Bash");
    assert!((p - 0.10).abs() < 1e-9);
    let snapshot = &world.progress.attempts_for("Slime")[0].expertise;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].attack, "Bash");
}

#[test]
fn test_faster_player_beats_slime_and_advances() {
    let config = EngineConfig {
        player_attack_cooldown_ms: 1_000.0,
        ..Default::default()
    };
    let mut world = World::new(config);
    let start = world.start();

    let (tick, next, events) = world.fight(start, 1_000);

    assert_eq!(tick, 88);
    assert_eq!(count(&events, |e| matches!(e, CombatEvent::PlayerAttack { .. })), 8);
    assert_eq!(count(&events, |e| matches!(e, CombatEvent::BossAttack { .. })), 5);

    let attempt = resolved_attempt(&events);
    assert_eq!(attempt.outcome, FightOutcome::Won);
    assert_eq!(attempt.final_player_hp, 50.0);
    assert_eq!(attempt.final_boss_hp, 0.0);

    assert!(events.contains(&CombatEvent::BossAdvanced { new_index: 1 }));
    assert_eq!(world.progress.current_boss_index, 1);
    assert_eq!(next.boss.name, "Stump");
    assert_eq!(next.boss_hp, 100.0);
    assert_eq!(next.log.last(), Some(VICTORY_MESSAGE));
}

#[test]
fn test_log_lines_match_game_text() {
    let mut world = World::new(EngineConfig::default());
    let start = world.start();

    let (_, next, _) = world.fight(start, 1_000);
    let lines: Vec<&str> = next.log.iter().collect();

    assert_eq!(lines[0], "Slime attacks with Bash, you got hit for 10!");
    assert!(lines.contains(&"Player attacks for 10!"));
    assert_eq!(*lines.last().unwrap(), "You Died!");
}

// =============================================================================
// Tie-breaks and edge cases
// =============================================================================

#[test]
fn test_simultaneous_knockout_counts_as_death() {
    let mut world = World::new(EngineConfig::default());
    let mut state = world.start();
    state.player_hp = 10.0;
    state.boss_hp = 10.0;
    state.player_cooldown_ms = 0.0;
    state.boss_cooldown_ms = 0.0;

    let (tick, next, events) = world.fight(state, 1);

    assert_eq!(tick, 1);
    assert_eq!(resolved_attempt(&events).outcome, FightOutcome::Died);
    assert_eq!(world.progress.current_boss_index, 0);
    assert_eq!(next.boss.name, "Slime");
}

#[test]
fn test_certain_dodge_never_loses_hp() {
    let mut world = World::new(EngineConfig::default());
    world.catalog = vec![Boss::new(
        "Wall",
        1_000_000.0,
        vec![Attack::new("Slam", 50.0, 100.0)],
    )];
    for _ in 0..100 {
        world.expertise.observe("Wall", "Slam");
    }
    let mut state = CombatState::new(world.catalog[0].clone(), &world.config);

    for _ in 0..200 {
        let mut ctx = TickContext {
            config: &world.config,
            catalog: &world.catalog,
            expertise: &mut world.expertise,
            progress: &mut world.progress,
        };
        state = advance_one_tick(state, &mut ctx, &mut NeverDodge).state;
    }

    assert_eq!(state.player_hp, 100.0);
    assert!(state.log.iter().any(|l| l == "Wall attacks with Slam, but you dodged it!"));
}
