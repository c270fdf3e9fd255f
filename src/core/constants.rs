// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
/// Batches longer than this many ticks are logged as a catch-up burst.
pub const CATCH_UP_WARN_TICKS: u64 = 600;

// Player
pub const INITIAL_PLAYER_HP: f64 = 100.0;
pub const PLAYER_DAMAGE: f64 = 10.0;
pub const PLAYER_ATTACK_COOLDOWN_MS: f64 = 2000.0;

// Boss
pub const INITIAL_BOSS_COOLDOWN_MS: f64 = 1000.0;

// Expertise
pub const EXPERTISE_STEP: f64 = 0.01;

// Combat log
pub const MAX_LOG_ENTRIES: usize = 500;
pub const DEATH_MESSAGE: &str = "You Died!";
pub const VICTORY_MESSAGE: &str = "You Won!";

// Files under ~/.bossrush/
pub const SAVE_DIR_NAME: &str = ".bossrush";
pub const EXPERTISE_FILE: &str = "expertise.json";
pub const PROGRESS_FILE: &str = "progress.json";
pub const CONFIG_FILE: &str = "config.json";
