//! TUI constants: layout sizes and scroll steps.

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Screen padding around the content (columns, rows).
pub(super) const SCREEN_PADDING_X: u16 = 2;
pub(super) const SCREEN_PADDING_Y: u16 = 1;

/// Spacer between the message list and the bottom row.
pub(super) const SPACER_ROWS: u16 = 1;

/// Bottom row height (rounded input box and trigger button).
pub(super) const BOTTOM_ROW_HEIGHT: u16 = 3;

/// Gap between the input box and the trigger button.
pub(super) const BUTTON_GAP: u16 = 1;

pub(super) const BUTTON_WIDTH: u16 = 6;

/// Bubbles take at most this share of the list width (percent).
pub(super) const BUBBLE_MAX_WIDTH_PERCENT: u16 = 75;

/// Blank rows between bubbles.
pub(super) const BUBBLE_GAP_ROWS: usize = 1;
