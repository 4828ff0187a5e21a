//! Cell painting: glow background and translucent fills composited over what is already drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::core::glow::palette::Rgba;
use crate::core::screen::Background;

/// Opaque terminal color for `c` (alpha ignored).
pub(super) fn to_color(c: Rgba) -> Color {
    let (r, g, b) = c.to_rgb8();
    Color::Rgb(r, g, b)
}

/// Background of a cell as an opaque color. Non-RGB colors count as black.
fn cell_background(buf: &Buffer, x: u16, y: u16) -> Rgba {
    match buf[(x, y)].bg {
        Color::Rgb(r, g, b) => Rgba::opaque(r, g, b),
        _ => crate::core::glow::palette::BLACK,
    }
}

/// Fill `area` with the screen background; a glow fades according to its variant's falloff.
pub(super) fn paint_background(buf: &mut Buffer, area: Rect, background: &Background) {
    let area = area.intersection(buf.area);
    let variant = background.variant();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let strength = variant
                .map(|v| v.falloff(x - area.x, y - area.y, area.width, area.height))
                .unwrap_or(1.0);
            buf[(x, y)].set_bg(to_color(background.color_at(strength)));
        }
    }
}

/// Composite `color` over the current background of every cell in `rect`.
pub(super) fn tint(buf: &mut Buffer, rect: Rect, color: Rgba) {
    let rect = rect.intersection(buf.area);
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            let under = cell_background(buf, x, y);
            buf[(x, y)].set_bg(to_color(color.over(under)));
        }
    }
}
