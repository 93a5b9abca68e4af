//! # Configuration
//!
//! Where GAzie TUI keeps its files.
//!
//! ## Locations
//! ```text
//! $HOME/.gazie-tui/
//! ├── gazie.db     ◄── GAZIE_DB_PATH overrides the whole path
//! └── gazie.log    ◄── GAZIE_LOG_DIR overrides the directory
//! ```
//!
//! Without a log directory override, the log sits next to the database.

use directories::BaseDirs;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Directory under the user's home that holds all data.
pub const DATA_DIR_NAME: &str = ".gazie-tui";

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "gazie.db";

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "gazie.log";

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "GAZIE_DB_PATH";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "GAZIE_LOG_DIR";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,gazie=debug,sqlx=warn";

/// Resolved file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves locations from the environment and the user's home directory.
    pub fn from_env() -> AppResult<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::resolve(home, |key| std::env::var_os(key))
    }

    /// Resolves locations from an explicit home directory and variable lookup.
    ///
    /// Empty variables count as unset.
    pub fn resolve(
        home: Option<PathBuf>,
        var: impl Fn(&str) -> Option<OsString>,
    ) -> AppResult<Self> {
        let lookup = |key: &str| var(key).filter(|value| !value.is_empty()).map(PathBuf::from);

        let database_path = match lookup(DB_PATH_ENV) {
            Some(path) => path,
            None => home
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "cannot determine home directory; set {DB_PATH_ENV}"
                    ))
                })?
                .join(DATA_DIR_NAME)
                .join(DB_FILE_NAME),
        };

        let log_dir = lookup(LOG_DIR_ENV).unwrap_or_else(|| {
            database_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
        });

        Ok(AppConfig {
            database_path,
            log_dir,
        })
    }

    /// Full path of the log file.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_under_home() {
        let config = AppConfig::resolve(Some(PathBuf::from("/home/anna")), env(&[])).unwrap();

        assert_eq!(
            config.database_path,
            PathBuf::from("/home/anna/.gazie-tui/gazie.db")
        );
        assert_eq!(config.log_dir, PathBuf::from("/home/anna/.gazie-tui"));
        assert_eq!(config.log_file(), PathBuf::from("/home/anna/.gazie-tui/gazie.log"));
    }

    #[test]
    fn test_db_override_moves_log_too() {
        let config = AppConfig::resolve(
            Some(PathBuf::from("/home/anna")),
            env(&[(DB_PATH_ENV, "/srv/data/ditta.db")]),
        )
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/srv/data/ditta.db"));
        assert_eq!(config.log_dir, PathBuf::from("/srv/data"));
    }

    #[test]
    fn test_log_dir_override() {
        let config = AppConfig::resolve(
            Some(PathBuf::from("/home/anna")),
            env(&[(LOG_DIR_ENV, "/var/log/gazie")]),
        )
        .unwrap();

        assert_eq!(config.log_dir, PathBuf::from("/var/log/gazie"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config =
            AppConfig::resolve(Some(PathBuf::from("/h")), env(&[(DB_PATH_ENV, "")])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/h/.gazie-tui/gazie.db"));
    }

    #[test]
    fn test_no_home_without_override_fails() {
        let err = AppConfig::resolve(None, env(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let config = AppConfig::resolve(None, env(&[(DB_PATH_ENV, "gazie.db")])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("gazie.db"));
    }
}
