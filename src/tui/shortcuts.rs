//! Centralized keyboard shortcuts.
//!
//! | Action        | Keys                       |
//! |---------------|----------------------------|
//! | Toggle glow   | Enter, Space, a            |
//! | Scroll        | ↑ ↓ PageUp PageDown Home   |
//! | Quit          | Ctrl+C, Esc, q             |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::constants::{SCROLL_LINES_PAGE, SCROLL_LINES_SMALL};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Press the "AI" trigger button.
    ToggleGlow,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Only key presses count (not repeats/releases).
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(Shortcut::Quit),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => Some(Shortcut::ToggleGlow),
            KeyCode::Up => Some(Shortcut::ScrollUp(SCROLL_LINES_SMALL)),
            KeyCode::Down => Some(Shortcut::ScrollDown(SCROLL_LINES_SMALL)),
            KeyCode::PageUp => Some(Shortcut::ScrollUp(SCROLL_LINES_PAGE)),
            KeyCode::PageDown => Some(Shortcut::ScrollDown(SCROLL_LINES_PAGE)),
            KeyCode::Home => Some(Shortcut::ScrollTop),
            _ => None,
        }
    }
}

/// Labels for the help text.
pub mod labels {
    pub const TOGGLE: &str = "Enter/Space/a";
    pub const SCROLL: &str = "↑↓ PgUp PgDn";
    pub const QUIT: &str = "q/Esc/Ctrl+C";
}
