//! Input handling and keybindings.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use super::state::{AppState, PAGE_STEP};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Fetch the record set now.
    Refresh,
}

/// Handles key input and updates state.
///
/// Navigation and the auto-refresh toggle mutate `state` directly; quitting
/// and refreshing are returned to the caller, which owns the record source.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    let rows = state.visible_rows;
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refresh,

        KeyCode::Char('t') | KeyCode::Char('T') => {
            let enabled = state.refresh.toggle(now);
            info!(enabled, "auto-refresh toggled");
            KeyAction::None
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.viewport.move_selection(-1, rows);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.viewport.move_selection(1, rows);
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.viewport.move_selection(-PAGE_STEP, rows);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.viewport.move_selection(PAGE_STEP, rows);
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.viewport.jump_to_start(rows);
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.viewport.jump_to_end(rows);
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
