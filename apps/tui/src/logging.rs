//! File logging.
//!
//! The terminal is owned by the UI, so log lines go to `gazie.log` instead
//! of stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use crate::error::{AppError, AppResult};

/// Initializes the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gazie_db=trace` - Trace the database layer only
/// - Default: `info,gazie=debug,sqlx=warn`
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// until the process exits.
pub fn init(config: &AppConfig) -> AppResult<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir).map_err(|e| {
        AppError::Logging(format!(
            "cannot create log directory {}: {e}",
            config.log_dir.display()
        ))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .map_err(|e| {
            AppError::Logging(format!(
                "cannot open {}: {e}",
                config.log_file().display()
            ))
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            database_path: PathBuf::from(":memory:"),
            log_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir(config.log_file()).unwrap();

        let Err(AppError::Logging(msg)) = init(&config) else {
            panic!("expected a logging error");
        };
        assert!(msg.contains(LOG_FILE_NAME));
    }

    #[test]
    fn test_writes_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let guard = init(&config).unwrap();
        tracing::warn!("log line for test");
        drop(guard);

        let content = std::fs::read_to_string(config.log_file()).unwrap();
        assert!(content.contains("log line for test"));

        // A second subscriber cannot be installed in the same process.
        assert!(matches!(init(&config), Err(AppError::Logging(_))));
    }
}
