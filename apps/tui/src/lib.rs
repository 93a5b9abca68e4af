//! # GAzie TUI
//!
//! Terminal manager for customer and product records.
//!
//! ## Module Organization
//! ```text
//! gazie_tui/
//! ├── lib.rs          ◄─── You are here (startup & event loop)
//! ├── config.rs       ◄─── File locations and env overrides
//! ├── logging.rs      ◄─── tracing to gazie.log
//! ├── error.rs        ◄─── AppError for fatal failures
//! ├── events.rs       ◄─── crossterm events → Input
//! ├── runtime.rs      ◄─── state machine + command execution
//! └── ui/
//!     ├── mod.rs      ◄─── frame layout
//!     ├── views.rs    ◄─── per-screen body text
//!     ├── widgets.rs  ◄─── truncation, markers, key hints
//!     └── terminal.rs ◄─── raw mode / alternate screen
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod runtime;
pub mod ui;

use gazie_core::app::Input;
use gazie_db::{Database, DbConfig, DbError};
use tracing::info;

use config::AppConfig;
use error::AppResult;
use events::EventSource;
use runtime::{Flow, Runtime};
use ui::terminal::{self, Tui};

/// Runs GAzie TUI until the user quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Resolve paths ($HOME/.gazie-tui, GAZIE_DB_PATH, GAZIE_LOG_DIR)     │
/// │  2. Start file logging                                                 │
/// │  3. Open database, create tables, seed empty tables                    │
/// │  4. Load both lists                                                    │
/// │  5. Enter raw mode / alternate screen                                  │
/// │  6. Event loop: draw → next input → dispatch                           │
/// │  7. Restore terminal, close pool                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Any error in steps 1-4 is returned before the terminal is touched.
pub async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(&config)?;

    info!(
        database = %config.database_path.display(),
        "Starting GAzie TUI"
    );

    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    if !db.health_check().await {
        return Err(DbError::ConnectionFailed(format!(
            "database {} does not answer queries",
            config.database_path.display()
        ))
        .into());
    }
    let mut runtime = Runtime::start(db.clone()).await;

    let mut tui = terminal::init()?;
    let result = event_loop(&mut tui, &mut runtime).await;
    let restored = terminal::restore();

    db.close().await;
    info!("GAzie TUI stopped");

    result?;
    restored?;
    Ok(())
}

async fn event_loop(tui: &mut Tui, runtime: &mut Runtime) -> AppResult<()> {
    let size = tui.size()?;
    runtime
        .dispatch(Input::Resize {
            width: size.width,
            height: size.height,
        })
        .await;

    let mut events = EventSource::new();

    loop {
        tui.draw(|frame| ui::render(frame, runtime.state()))?;

        let Some(input) = events.next().await? else {
            break;
        };

        if runtime.dispatch(input).await == Flow::Quit {
            break;
        }
    }

    Ok(())
}
