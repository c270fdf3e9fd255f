use super::types::{CombatEvent, CombatState};
use crate::catalog::Boss;
use crate::core::config::EngineConfig;
use crate::core::constants::{DEATH_MESSAGE, VICTORY_MESSAGE};
use crate::expertise::ExpertiseTable;
use crate::progress::{Attempt, FightOutcome, ProgressState};
use rand::Rng;

/// Source of the two random draws a boss attack needs.
///
/// Every `rand::Rng` is one; tests can script the draws directly.
pub trait CombatRng {
    /// Index of the attack to throw, in `0..attack_count`.
    fn pick_attack(&mut self, attack_count: usize) -> usize;
    /// Uniform roll in `[0, 1)` compared against the dodge probability.
    fn roll(&mut self) -> f64;
}

impl<R: Rng + ?Sized> CombatRng for R {
    fn pick_attack(&mut self, attack_count: usize) -> usize {
        self.gen_range(0..attack_count)
    }

    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Process-wide state a tick reads and writes besides the fight itself.
pub struct TickContext<'a> {
    pub config: &'a EngineConfig,
    pub catalog: &'a [Boss],
    pub expertise: &'a mut ExpertiseTable,
    pub progress: &'a mut ProgressState,
}

/// Result of one tick: the state to feed into the next tick plus what happened.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: CombatState,
    pub events: Vec<CombatEvent>,
}

impl TickOutcome {
    pub fn resolved(&self) -> Option<FightOutcome> {
        self.events.iter().find_map(|e| match e {
            CombatEvent::FightResolved { attempt, .. } => Some(attempt.outcome),
            _ => None,
        })
    }
}

/// Advances a fight by exactly one tick.
///
/// Each actor either acts or has its cooldown reduced by one interval, never
/// both. Every boss attack is observed by the expertise table whether it hit
/// or was dodged. Death is checked before victory, so a tick where both sides
/// drop to zero counts as a death. A resolved fight records an attempt and
/// returns a fresh state (for the boss progression points at after a win).
pub fn advance_one_tick(
    mut state: CombatState,
    ctx: &mut TickContext<'_>,
    rng: &mut impl CombatRng,
) -> TickOutcome {
    let mut events = Vec::new();
    let interval = ctx.config.tick_interval_f64();

    // Boss turn
    if state.boss_cooldown_ms <= 0.0 {
        let index = rng.pick_attack(state.boss.attacks.len());
        let attack = state.boss.attacks[index].clone();
        let dodge_probability = ctx
            .expertise
            .dodge_probability(&state.boss.name, &attack.name);
        let dodged = rng.roll() <= dodge_probability;

        ctx.expertise
            .observe_by(&state.boss.name, &attack.name, ctx.config.expertise_step);

        if dodged {
            state.log.push(format!(
                "{} attacks with {}, but you dodged it!",
                state.boss.name, attack.name
            ));
        } else {
            state.player_hp -= attack.damage;
            state.log.push(format!(
                "{} attacks with {}, you got hit for {}!",
                state.boss.name, attack.name, attack.damage
            ));
        }
        state.boss_cooldown_ms = attack.cooldown_ms;

        events.push(CombatEvent::BossAttack {
            attack: attack.name,
            damage: if dodged { 0.0 } else { attack.damage },
            dodged,
            dodge_probability,
        });
    } else {
        state.boss_cooldown_ms -= interval;
    }

    // Player turn
    if state.player_cooldown_ms <= 0.0 {
        let damage = ctx.config.player_damage;
        state.boss_hp -= damage;
        state.log.push(format!("Player attacks for {}!", damage));
        state.player_cooldown_ms = ctx.config.player_attack_cooldown_ms;
        events.push(CombatEvent::PlayerAttack { damage });
    } else {
        state.player_cooldown_ms -= interval;
    }

    // Death wins ties
    let outcome = if state.is_player_dead() {
        FightOutcome::Died
    } else if state.is_boss_dead() {
        FightOutcome::Won
    } else {
        return TickOutcome { state, events };
    };

    let state = resolve_fight(state, outcome, ctx, &mut events);
    TickOutcome { state, events }
}

/// Records the attempt, applies progression and starts the next fight.
fn resolve_fight(
    mut state: CombatState,
    outcome: FightOutcome,
    ctx: &mut TickContext<'_>,
    events: &mut Vec<CombatEvent>,
) -> CombatState {
    state.log.push(
        match outcome {
            FightOutcome::Died => DEATH_MESSAGE,
            FightOutcome::Won => VICTORY_MESSAGE,
        }
        .to_string(),
    );

    let attempt = Attempt {
        outcome,
        final_player_hp: state.player_hp,
        final_boss_hp: state.boss_hp,
        expertise: ctx.expertise.snapshot_for_boss(&state.boss.name),
    };
    tracing::info!(
        boss = %state.boss.name,
        ?outcome,
        player_hp = state.player_hp,
        boss_hp = state.boss_hp,
        "fight resolved"
    );
    ctx.progress.record_attempt(&state.boss.name, attempt.clone());
    events.push(CombatEvent::FightResolved {
        boss_name: state.boss.name.clone(),
        attempt,
    });

    let mut next_boss = state.boss;
    if outcome == FightOutcome::Won {
        if ctx.progress.advance_boss(ctx.catalog.len()) {
            let new_index = ctx.progress.current_boss_index;
            tracing::info!(new_index, "advanced to next boss");
            events.push(CombatEvent::BossAdvanced { new_index });
        }
        if let Some(boss) = ctx.catalog.get(ctx.progress.current_boss_index) {
            next_boss = boss.clone();
        }
    }

    CombatState::fresh(next_boss, ctx.config, state.log)
}
