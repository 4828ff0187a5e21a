//! Message list: rounded bubbles, sender-aligned, with a scrollbar when they overflow.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::glow::palette::Rgba;
use crate::core::screen::{Align, BubbleView, SCREEN_BACKGROUND};

use super::super::constants::{BUBBLE_GAP_ROWS, BUBBLE_MAX_WIDTH_PERCENT};
use super::super::text::{display_width, wrap_message};
use super::paint::{tint, to_color};

/// Narrowest bubble: borders, padding and a few characters.
const BUBBLE_MIN_WIDTH: u16 = 8;

/// One terminal row of a bubble.
#[derive(Debug, Clone)]
pub(super) struct BubbleRow {
    /// Offset from the left edge of the list.
    pub indent: u16,
    pub width: u16,
    pub fill: Rgba,
    /// Whether the cells between the side borders get the fill.
    pub filled: bool,
    pub line: Line<'static>,
}

fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Lay out a bubble as rows for a list `list_width` columns wide.
pub(super) fn bubble_rows(bubble: &BubbleView<'_>, list_width: u16) -> Vec<BubbleRow> {
    let max_width = (list_width as u32 * BUBBLE_MAX_WIDTH_PERCENT as u32 / 100) as u16;
    let max_width = max_width.max(BUBBLE_MIN_WIDTH).min(list_width);
    let text_width = max_width.saturating_sub(4) as usize;

    let lines = wrap_message(bubble.text, text_width.max(1));
    let content_width = lines
        .iter()
        .map(|l| display_width(l))
        .chain(std::iter::once(display_width(bubble.timestamp)))
        .max()
        .unwrap_or(0)
        .min(text_width.max(1));
    let width = content_width as u16 + 4;
    let indent = match bubble.align {
        Align::Start => 0,
        Align::End => list_width.saturating_sub(width),
    };

    let fill_solid = bubble.fill.over(SCREEN_BACKGROUND);
    let border_style = Style::default().fg(to_color(fill_solid));
    let text_style = Style::default().fg(to_color(bubble.text_color.over(fill_solid)));
    let timestamp_style = Style::default().fg(to_color(bubble.timestamp_color.over(fill_solid)));

    let row = |filled: bool, line: Line<'static>| BubbleRow {
        indent,
        width,
        fill: bubble.fill,
        filled,
        line,
    };
    let content_line = |text: &str, style: Style| {
        let pad = content_width.saturating_sub(display_width(text));
        Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(format!("{}{}", text, " ".repeat(pad)), style),
            Span::styled(" │", border_style),
        ])
    };

    let inner = width.saturating_sub(2) as usize;
    let mut rows = Vec::with_capacity(lines.len() + 3);
    rows.push(row(
        false,
        Line::from(Span::styled(
            format!("╭{}╮", repeat_char('─', inner)),
            border_style,
        )),
    ));
    for text in &lines {
        rows.push(row(true, content_line(text, text_style)));
    }
    rows.push(row(true, content_line(bubble.timestamp, timestamp_style)));
    rows.push(row(
        false,
        Line::from(Span::styled(
            format!("╰{}╯", repeat_char('─', inner)),
            border_style,
        )),
    ));
    rows
}

/// All bubbles stacked with gaps; `None` is a blank row.
pub(super) fn list_rows(bubbles: &[BubbleView<'_>], list_width: u16) -> Vec<Option<BubbleRow>> {
    let mut rows = Vec::new();
    for (i, bubble) in bubbles.iter().enumerate() {
        if i > 0 {
            rows.extend(std::iter::repeat_n(None, BUBBLE_GAP_ROWS));
        }
        rows.extend(bubble_rows(bubble, list_width).into_iter().map(Some));
    }
    rows
}

/// Draw the list starting at row `scroll`. Returns the largest useful scroll offset.
pub(super) fn draw_history(
    f: &mut Frame,
    bubbles: &[BubbleView<'_>],
    scroll: usize,
    area: Rect,
) -> usize {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];

    let rows = list_rows(bubbles, text_area.width);
    let total = rows.len();
    let visible = text_area.height as usize;
    let max_scroll = total.saturating_sub(visible);
    let start = scroll.min(max_scroll);

    for (i, row) in rows.iter().skip(start).take(visible).enumerate() {
        let Some(row) = row else { continue };
        let y = text_area.y + i as u16;
        let rect = Rect::new(text_area.x + row.indent, y, row.width, 1).intersection(text_area);
        f.render_widget(Paragraph::new(row.line.clone()), rect);
        if row.filled {
            let interior = Rect::new(rect.x + 1, y, rect.width.saturating_sub(2), 1);
            tint(f.buffer_mut(), interior, row.fill);
        }
    }

    if total > visible {
        let mut scrollbar_state = ScrollbarState::default()
            .position(start)
            .content_length(max_scroll + 1);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("█")
            .track_symbol(Some("│"));
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    max_scroll
}
