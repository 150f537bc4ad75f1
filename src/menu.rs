//! Interactive folder selection menu.
//!
//! The selection logic is a plain state machine over a row index so it can
//! be exercised without a terminal; [`pick_label`] wires it to a full-screen
//! crossterm/ratatui front-end.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::{Frame, Terminal};

use crate::catalog;
use crate::error::{ExportError, Result};

/// Inputs understood by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
    Other,
}

/// Current menu selection. The row index always stays within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    row: usize,
    rows: usize,
}

impl MenuState {
    pub fn new(rows: usize) -> Self {
        Self { row: 0, rows }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Applies one input, returning the confirmed row on [`MenuInput::Confirm`].
    pub fn apply(&mut self, input: MenuInput) -> Option<usize> {
        match input {
            MenuInput::Up if self.row > 0 => self.row -= 1,
            MenuInput::Down if self.row + 1 < self.rows => self.row += 1,
            MenuInput::Confirm => return Some(self.row),
            _ => {}
        }
        None
    }
}

/// Presents the catalog in a full-screen menu and returns the chosen label.
///
/// Blocks until the user confirms a row with Enter. Ctrl+C aborts the menu.
/// The terminal is restored before this function returns, on every path.
pub fn pick_label() -> Result<&'static str> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let picked = run_menu(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    picked.map(|row| catalog::LABELS[row])
}

fn run_menu<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<usize> {
    let mut state = MenuState::new(catalog::LABELS.len());

    loop {
        terminal.draw(|frame| render(frame, &state))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Err(ExportError::MenuAborted);
        }

        let input = match key.code {
            KeyCode::Up => MenuInput::Up,
            KeyCode::Down => MenuInput::Down,
            KeyCode::Enter => MenuInput::Confirm,
            _ => MenuInput::Other,
        };
        if let Some(row) = state.apply(input) {
            return Ok(row);
        }
    }
}

fn render(frame: &mut Frame, state: &MenuState) {
    let items: Vec<ListItem> = catalog::LABELS
        .iter()
        .map(|label| ListItem::new(*label))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a data folder"),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White));

    let mut list_state = ListState::default();
    list_state.select(Some(state.row()));
    frame.render_stateful_widget(list, frame.area(), &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_first_row() {
        let state = MenuState::new(3);
        assert_eq!(state.row(), 0);
    }

    #[test]
    fn up_at_the_first_row_is_a_no_op() {
        let mut state = MenuState::new(3);
        assert_eq!(state.apply(MenuInput::Up), None);
        assert_eq!(state.row(), 0);
    }

    #[test]
    fn down_at_the_last_row_is_a_no_op() {
        let mut state = MenuState::new(2);
        assert_eq!(state.apply(MenuInput::Down), None);
        assert_eq!(state.apply(MenuInput::Down), None);
        assert_eq!(state.row(), 1);
    }

    #[test]
    fn navigation_moves_one_row_at_a_time() {
        let mut state = MenuState::new(3);
        state.apply(MenuInput::Down);
        state.apply(MenuInput::Down);
        state.apply(MenuInput::Up);
        assert_eq!(state.row(), 1);
    }

    #[test]
    fn confirm_returns_the_current_row() {
        let mut state = MenuState::new(3);
        state.apply(MenuInput::Down);
        assert_eq!(state.apply(MenuInput::Confirm), Some(1));
    }

    #[test]
    fn other_inputs_change_nothing() {
        let mut state = MenuState::new(3);
        state.apply(MenuInput::Down);
        assert_eq!(state.apply(MenuInput::Other), None);
        assert_eq!(state.row(), 1);
    }
}
