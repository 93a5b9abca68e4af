//! # Application Error Type
//!
//! Errors that stop GAzie TUI.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup (config, logging, database open)  ──► AppError ──► stderr,    │
//! │  Terminal I/O (raw mode, drawing, events)  ──►              exit 1     │
//! │                                                                         │
//! │  Validation and insert failures never get here: the state machine      │
//! │  turns them into status line text.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gazie_db::DbError;
use thiserror::Error;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Paths could not be resolved.
    ///
    /// ## When This Occurs
    /// - No home directory and no `GAZIE_DB_PATH` override
    #[error("Configuration error: {0}")]
    Config(String),

    /// The log file or subscriber could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// The database could not be opened or initialized.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Terminal setup, drawing or input failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
