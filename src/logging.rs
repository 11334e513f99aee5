//! Process-wide tracing setup.
//!
//! Initialised once from [`crate::run`]. The returned guard must live until
//! the process exits so that buffered lines reach the log file.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "bdreminder.log";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a daily-rotated file under `log_dir`. Falls back to stderr when
/// the directory cannot be created.
pub fn init_file(log_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        init_stderr("warn");
        tracing::warn!(error = %e, dir = %log_dir.display(), "cannot create log directory");
        return None;
    }

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter("info"))
        .try_init();

    Some(guard)
}

/// Log to stderr only (test mode).
pub fn init_stderr(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(default_level))
        .try_init();
}
