//! tracing setup for the binaries. The library only emits events.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, else `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to a daily rolling file in `log_dir`; the terminal belongs to the UI.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_file_logging(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir, "bossrush.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::error!("panic at {}: {}", location, info);
        default_hook(info);
    }));

    guard
}

/// Logs to stderr, for the headless simulator. Only warnings by default,
/// since every simulated fight emits an info event.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
