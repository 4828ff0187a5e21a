//! Event handlers for the TUI: keyboard and mouse.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Set cursor to pointer (hand) or default. Uses OSC 22 (Kitty, iTerm2, Ghostty, Foot).
pub fn set_cursor_shape(pointer: bool) {
    use std::io::Write;
    let seq = if pointer {
        b"\x1b]22;pointer\x07"
    } else {
        b"\x1b]22;default\x07"
    };
    let _ = std::io::stdout().write_all(seq);
    let _ = std::io::stdout().flush();
}

/// Handle a key press.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    let Some(shortcut) = Shortcut::match_key(&key) else {
        return HandleResult::Continue;
    };
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::ToggleGlow => {
            app.screen.toggle();
        }
        Shortcut::ScrollUp(n) => app.scroll_up(n),
        Shortcut::ScrollDown(n) => app.scroll_down(n),
        Shortcut::ScrollTop => app.scroll = 0,
    }
    HandleResult::Continue
}

/// Handle a mouse event: click on the trigger button, wheel scroll, hover cursor.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    let pos = Position::new(mouse.column, mouse.row);
    let over_button = app.button_rect.is_some_and(|rect| rect.contains(pos));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if over_button => {
            app.screen.toggle();
        }
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        MouseEventKind::Moved => {
            if over_button != app.hovering_button {
                app.hovering_button = over_button;
                set_cursor_shape(over_button);
            }
        }
        _ => {}
    }
}
