//! # Rendering
//!
//! Paints an [`AppState`] snapshot. Nothing here changes state.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  🏢 GAzie TUI - Gestione Aziendale                        header (3)   │
//! │                                                                         │
//! │ ╭─────────────────────────────────────────────────────────────────────╮ │
//! │ │  menu / customer table / product table / form prompt                │ │
//! │ │                                                          body       │ │
//! │ ╰─────────────────────────────────────────────────────────────────────╯ │
//! │ status | ↑↓: Naviga | INVIO: Seleziona | ...               status (1)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod terminal;
pub mod views;
pub mod widgets;

use gazie_core::app::AppState;
use gazie_core::Screen;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

use widgets::{hint_style, render_footer_hints};

pub const HEADER_TITLE: &str = "🏢 GAzie TUI - Gestione Aziendale";

/// Draws the whole screen for a snapshot.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_body(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::styled(
        HEADER_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(2, 2, 1, 1)));

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::new(2, 2, 1, 1));

    frame.render_widget(Paragraph::new(views::body_lines(state)).block(block), area);
}

/// Key hints offered on a screen.
pub fn hints_for(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::MainMenu => &[
            ("↑↓", "Naviga"),
            ("INVIO", "Seleziona"),
            ("ESC", "Esci"),
        ],
        Screen::CustomerList | Screen::ProductList => &[
            ("↑↓", "Naviga"),
            ("N", "Nuovo"),
            ("R", "Aggiorna"),
            ("ESC", "Esci"),
        ],
        Screen::CustomerForm | Screen::ProductForm => &[("INVIO", "Salva"), ("ESC", "Annulla")],
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(format!(" {}", state.status), hint_style()),
        Span::styled(" | ", hint_style()),
    ];
    spans.extend(render_footer_hints(hints_for(state.screen)));

    let bar = Paragraph::new(Line::from(spans)).style(hint_style());
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazie_core::app::Input;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn draw(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn screen_has(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_main_menu_frame() {
        let lines = draw(&AppState::default(), 80, 24);

        assert!(screen_has(&lines, "GAzie TUI - Gestione Aziendale"));
        assert!(screen_has(&lines, "Seleziona un'opzione:"));
        let clienti = lines
            .iter()
            .find(|line| line.contains("Anagrafica Clienti"))
            .unwrap();
        assert!(clienti.contains("▶"));
        assert!(screen_has(&lines, "Benvenuto in GAzie TUI"));
        assert!(screen_has(&lines, "INVIO: Seleziona"));
    }

    #[test]
    fn test_empty_customer_list_frame() {
        let (state, _) = AppState::default().update(Input::Confirm);
        let lines = draw(&state, 80, 24);

        assert!(screen_has(&lines, "Codice    Nome"));
        assert!(screen_has(&lines, "Nessun cliente presente."));
        assert!(screen_has(&lines, "Gestione Clienti"));
        assert!(screen_has(&lines, "R: Aggiorna"));
    }

    #[test]
    fn test_form_frame() {
        let (state, _) = AppState::default().update(Input::Confirm);
        let (state, _) = state.update(Input::Char('n'));
        let (state, _) = state.update(Input::Char('X'));
        let lines = draw(&state, 80, 24);

        assert!(screen_has(&lines, "Nuovo Cliente"));
        assert!(screen_has(&lines, "Dati attuali: X"));
        assert!(screen_has(&lines, "INVIO: Salva"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        draw(&AppState::default(), 10, 3);
        draw(&AppState::default(), 1, 1);
    }
}
