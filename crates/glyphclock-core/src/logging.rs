//! File logging.
//!
//! The TUI owns stdout/stderr, so tracing output goes to a log file under
//! `${GLYPHCLOCK_HOME}/logs` through a non-blocking writer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var that overrides the configured log filter.
pub const LOG_ENV: &str = "GLYPHCLOCK_LOG";

const LOG_FILE_NAME: &str = "glyphclock.log";

/// Installs the global subscriber writing to `dir/glyphclock.log`.
///
/// `default_filter` is used unless `GLYPHCLOCK_LOG` is set. Keep the returned
/// guard alive for the lifetime of the program so buffered lines get flushed.
pub fn init_file_logging(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter '{default_filter}'"))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}
