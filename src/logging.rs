//! File-based diagnostics setup
//!
//! The terminal belongs to the UI, so diagnostics go to a rolling log file
//! instead of stdout. Warnings about unrenderable payloads and load
//! failures all flow through `tracing`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "folio.log";

/// Initialize the tracing subscriber writing to a file in `log_dir`
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller keeps it alive for the life of the process. `RUST_LOG` is
/// honored, with `info` as the default filter.
pub fn init(log_dir: Option<&str>) -> Result<WorkerGuard> {
    let dir = match log_dir {
        Some(dir) => PathBuf::from(dir),
        None => default_log_dir(),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn default_log_dir() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "folio", "folio") {
        dirs.cache_dir().to_path_buf()
    } else {
        PathBuf::from("./logs")
    }
}
