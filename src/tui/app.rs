//! TUI application state: the screen component plus terminal-only bits (scroll, hit areas).

use ratatui::layout::Rect;

use crate::core::screen::GlowChatScreen;

pub struct App {
    pub(crate) screen: GlowChatScreen,
    /// First visible row of the message list.
    pub(crate) scroll: usize,
    /// Largest useful scroll offset; updated each draw.
    pub(crate) last_max_scroll: usize,
    /// Rect of the "AI" button from the last draw; for click hit testing.
    pub(crate) button_rect: Option<Rect>,
    /// Mouse is over the button; used for cursor style.
    pub(crate) hovering_button: bool,
}

impl App {
    pub fn new(screen: GlowChatScreen) -> Self {
        Self {
            screen,
            scroll: 0,
            last_max_scroll: 0,
            button_rect: None,
            hovering_button: false,
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.last_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Resolve scroll position against the last known content height.
    pub(crate) fn scroll_line(&self) -> usize {
        self.scroll.min(self.last_max_scroll)
    }
}
