//! Bottom row: rounded "Message..." box and the AI trigger button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::core::screen::{ButtonView, InputView, SCREEN_BACKGROUND};

use super::super::constants::{BUTTON_GAP, BUTTON_WIDTH};
use super::paint::{tint, to_color};

/// Draw the input box and the trigger. Returns the button rect for click hit testing.
pub(super) fn draw_input_row(
    f: &mut Frame,
    input: &InputView,
    button: &ButtonView,
    area: Rect,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    draw_input_box(f, input, chunks[0]);
    draw_button(f, button, chunks[2]);
    chunks[2]
}

fn draw_input_box(f: &mut Frame, input: &InputView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(to_color(input.border.over(SCREEN_BACKGROUND))));
    let inner = block.inner(area);
    f.render_widget(block, area);
    tint(f.buffer_mut(), inner, input.fill);

    let text_color = input.text_color.over(input.fill.over(SCREEN_BACKGROUND));
    let placeholder = Line::from(Span::styled(
        format!(" {}", input.placeholder),
        Style::default().fg(to_color(text_color)),
    ));
    f.render_widget(Paragraph::new(placeholder), inner);
}

fn draw_button(f: &mut Frame, button: &ButtonView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(to_color(button.fill.over(SCREEN_BACKGROUND))));
    let inner = block.inner(area);
    f.render_widget(block, area);
    tint(f.buffer_mut(), inner, button.fill);

    let mut style = Style::default().fg(to_color(button.text_color.over(button.fill)));
    if button.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(button.label, style))).alignment(Alignment::Center),
        inner,
    );
}
