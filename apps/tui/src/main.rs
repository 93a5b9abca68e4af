//! # GAzie TUI Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match gazie_tui::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gazie-tui: {err}");
            ExitCode::FAILURE
        }
    }
}
