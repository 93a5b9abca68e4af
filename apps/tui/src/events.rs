//! # Keyboard Event Source
//!
//! Turns raw crossterm events into state machine [`Input`]s.
//!
//! ## Key Map
//! ```text
//! ┌──────────────────────┬──────────────────────────────┐
//! │  Terminal event      │  Input                       │
//! ├──────────────────────┼──────────────────────────────┤
//! │  ↑ / ↓               │  Up / Down                   │
//! │  Enter               │  Confirm                     │
//! │  Esc, Ctrl+C         │  Cancel                      │
//! │  Backspace           │  Backspace                   │
//! │  Space               │  Space                       │
//! │  other character     │  Char(c)                     │
//! │  terminal resize     │  Resize { width, height }    │
//! │  anything else       │  (dropped)                   │
//! └──────────────────────┴──────────────────────────────┘
//! ```

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use gazie_core::app::Input;
use tracing::trace;

/// Async stream of [`Input`]s read from the terminal.
pub struct EventSource {
    crossterm_events: EventStream,
}

impl EventSource {
    pub fn new() -> Self {
        EventSource {
            crossterm_events: EventStream::new(),
        }
    }

    /// Waits for the next meaningful input.
    ///
    /// Returns `Ok(None)` once the terminal closes its event stream.
    pub async fn next(&mut self) -> std::io::Result<Option<Input>> {
        loop {
            match self.crossterm_events.next().await {
                Some(Ok(event)) => {
                    if let Some(input) = map_event(event) {
                        trace!(?input, "Input received");
                        return Ok(Some(input));
                    }
                }
                Some(Err(err)) => return Err(err),
                None => return Ok(None),
            }
        }
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps one terminal event to an input, or `None` if it means nothing here.
pub fn map_event(event: CrosstermEvent) -> Option<Input> {
    match event {
        CrosstermEvent::Key(key) => map_key(key),
        CrosstermEvent::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Input> {
    // Release and repeat events are reported on some platforms.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl && !alt => Some(Input::Cancel),
        // Ctrl+Alt together is AltGr, which types '@' on Italian layouts.
        KeyCode::Char(_) if ctrl != alt => None,
        KeyCode::Char(' ') => Some(Input::Space),
        KeyCode::Char(c) => Some(Input::Char(c)),
        KeyCode::Up => Some(Input::Up),
        KeyCode::Down => Some(Input::Down),
        KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Esc => Some(Input::Cancel),
        KeyCode::Backspace => Some(Input::Backspace),
        _ => None,
    }
}
