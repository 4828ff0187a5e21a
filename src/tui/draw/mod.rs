//! TUI rendering: glow background, message bubbles and the input row.

mod history;
mod input;
mod paint;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::app::App;
use super::constants::{BOTTOM_ROW_HEIGHT, SCREEN_PADDING_X, SCREEN_PADDING_Y, SPACER_ROWS};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let view = app.screen.view();
    paint::paint_background(f.buffer_mut(), area, &view.background);

    let content = area.inner(Margin::new(SCREEN_PADDING_X, SCREEN_PADDING_Y));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(SPACER_ROWS),
            Constraint::Length(BOTTOM_ROW_HEIGHT),
        ])
        .split(content);

    app.last_max_scroll = history::draw_history(f, &view.bubbles, app.scroll, chunks[0]);
    app.button_rect = Some(input::draw_input_row(
        f,
        &view.input,
        &view.button,
        chunks[2],
    ));
}
