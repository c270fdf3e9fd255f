//! Wall-clock driver that turns elapsed real time into whole simulation ticks.
//!
//! The timer driving the loop may fire late or early; the catch-up loop makes
//! sure the fight still advances by the right amount of in-game time. Ticks
//! are replayed strictly in order, each one fed the previous tick's output.

use super::constants::CATCH_UP_WARN_TICKS;
use super::session::BossRush;
use crate::combat::logic::CombatRng;
use crate::combat::CombatEvent;
use std::time::{Duration, Instant};

/// Something the catch-up loop can step one tick at a time.
///
/// Implemented by the interactive game and usable by test doubles.
pub trait Simulation {
    /// Execute one tick. Returns what happened.
    fn tick(&mut self, rng: &mut impl CombatRng) -> Vec<CombatEvent>;

    /// Combat log lines written so far, including evicted ones.
    fn log_written(&self) -> u64;
}

impl Simulation for BossRush {
    fn tick(&mut self, rng: &mut impl CombatRng) -> Vec<CombatEvent> {
        BossRush::tick(self, rng)
    }

    fn log_written(&self) -> u64 {
        self.combat().log.total_written()
    }
}

/// What one timer firing did.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Wall-clock time since the previous firing, clamped at zero
    pub elapsed: Duration,
    pub ticks: u64,
    /// The combat log changed over the whole batch (drives auto-scroll)
    pub log_grew: bool,
    pub events: Vec<CombatEvent>,
}

/// Catch-up loop state.
///
/// A batch replays `ceil(elapsed / interval)` ticks. The simulation can
/// therefore run up to one interval ahead of the wall clock; that lead is
/// carried into the next batch, so the total number of ticks depends only on
/// the total elapsed time and not on how it was split across firings.
#[derive(Debug, Clone)]
pub struct CatchUpLoop {
    interval: Duration,
    last_update: Instant,
    lead: Duration,
}

impl CatchUpLoop {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        // A zero interval would never leave the replay loop
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            last_update: start,
            lead: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_update(&self) -> Instant {
        self.last_update
    }

    /// When the next batch is due.
    pub fn next_firing(&self) -> Instant {
        self.last_update + self.interval
    }

    /// How long to wait from `now` until the next batch is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_firing().saturating_duration_since(now)
    }

    /// Runs the batch for a timer firing happening now.
    pub fn run_batch<S: Simulation>(
        &mut self,
        sim: &mut S,
        rng: &mut impl CombatRng,
    ) -> BatchReport {
        self.run_batch_at(Instant::now(), sim, rng)
    }

    /// Runs the batch for a timer firing at `now`.
    ///
    /// A `now` earlier than the previous firing counts as zero elapsed time.
    pub fn run_batch_at<S: Simulation>(
        &mut self,
        now: Instant,
        sim: &mut S,
        rng: &mut impl CombatRng,
    ) -> BatchReport {
        let elapsed = now.saturating_duration_since(self.last_update);
        let budget = elapsed.saturating_sub(self.lead);
        let log_before = sim.log_written();

        let mut events = Vec::new();
        let mut ticks = 0u64;
        let mut t = Duration::ZERO;
        while t < budget {
            events.extend(sim.tick(rng));
            t += self.interval;
            ticks += 1;
        }

        self.lead = self.lead.saturating_sub(elapsed) + (t - budget);
        self.last_update = self.last_update.max(now);

        if ticks > CATCH_UP_WARN_TICKS {
            tracing::warn!(
                ticks,
                elapsed_ms = elapsed.as_millis() as u64,
                "large catch-up burst"
            );
        }

        BatchReport {
            elapsed,
            ticks,
            log_grew: sim.log_written() != log_before,
            events,
        }
    }
}
