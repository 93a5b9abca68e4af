//! Terminal setup and teardown.

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode and the alternate screen.
///
/// Also installs a panic hook that restores the terminal first, so a
/// panic message is readable.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    undo_on_err(execute!(stdout, EnterAlternateScreen), disable_raw_mode)?;
    install_panic_hook();

    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves the alternate screen and raw mode.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Runs `undo` when a setup step fails, then returns the original result.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original(info);
    }));
}
