//! The glow chat screen: messages, toggle state and animation bound to a mount lifecycle.

mod messages;
mod view;

pub use messages::{ChatMessage, sample_messages};
pub use view::{
    Align, Background, BubbleView, ButtonView, INPUT_PLACEHOLDER, InputView, SCREEN_BACKGROUND,
    ScreenView, TRIGGER_LABEL, compose,
};

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::core::clock::{Clock, ManualClock};
use crate::core::glow::state::{GlowState, SubscriptionId};
use crate::core::glow::crossfade::CROSSFADE_MS;
use crate::core::glow::palette::PALETTE_SLOT_MS;
use crate::core::glow::{GlowAnimator, GlowFrame, GlowVariant};
use crate::core::ticker::Ticker;

/// Screen component. Lives on the UI thread.
///
/// `mount` starts the animation (optionally fed by a [`Ticker`]); `unmount` cancels the ticker,
/// stops the animator and resets the toggle. Nothing advances while unmounted.
pub struct GlowChatScreen {
    messages: Vec<ChatMessage>,
    glow: GlowState,
    animator: GlowAnimator,
    clock: Arc<dyn Clock>,
    ticker: Option<Ticker>,
    variant: GlowVariant,
    frame: GlowFrame,
    redraw_requested: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl GlowChatScreen {
    pub fn new(clock: Arc<dyn Clock>, variant: GlowVariant) -> Self {
        let mut glow = GlowState::new();
        let redraw_requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&redraw_requested);
        let subscription = glow.subscribe(move |_| flag.set(true));
        Self {
            messages: sample_messages(),
            glow,
            animator: GlowAnimator::new(),
            clock,
            ticker: None,
            variant,
            frame: GlowFrame::IDLE,
            redraw_requested,
            subscription,
        }
    }

    pub fn variant(&self) -> GlowVariant {
        self.variant
    }

    pub fn is_active(&self) -> bool {
        self.glow.is_active()
    }

    pub fn is_mounted(&self) -> bool {
        self.animator.is_mounted()
    }

    /// Last derived animation values.
    pub fn frame(&self) -> GlowFrame {
        self.frame
    }

    /// Start the animation; frames are derived on demand with [`GlowChatScreen::advance`].
    pub fn mount(&mut self) {
        self.glow.reset();
        self.animator.mount(self.clock.as_ref());
        self.frame = GlowFrame::IDLE;
        self.redraw_requested.set(true);
        log::debug!("Screen mounted ({} glow)", self.variant);
    }

    /// Mount and let `ticker` pace the animation through [`GlowChatScreen::poll`].
    pub fn mount_with_ticker(&mut self, ticker: Ticker) {
        self.mount();
        log::debug!("Ticking every {} ms", ticker.period().as_millis());
        self.ticker = Some(ticker);
    }

    pub fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.animator.unmount();
        self.glow.reset();
        self.redraw_requested.set(false);
        log::debug!("Screen unmounted");
    }

    /// Trigger button activation. Ignored while unmounted.
    pub fn toggle(&mut self) -> bool {
        if !self.is_mounted() {
            log::debug!("Toggle ignored: screen not mounted");
            return self.glow.is_active();
        }
        let active = self.glow.toggle();
        self.advance();
        active
    }

    /// Derive a new frame from the clock. `None` (and no change) when unmounted.
    pub fn advance(&mut self) -> Option<GlowFrame> {
        let frame = self
            .animator
            .tick(self.clock.as_ref(), self.glow.is_active())?;
        self.frame = frame;
        Some(frame)
    }

    /// Consume pending ticks. Returns true when the screen should be redrawn.
    pub fn poll(&mut self) -> bool {
        let ticked = self.ticker.as_ref().and_then(Ticker::poll).is_some();
        if ticked {
            self.advance();
        }
        self.redraw_requested.replace(false) || ticked
    }

    /// Render description for the current state.
    pub fn view(&self) -> ScreenView<'_> {
        compose(&self.messages, &self.frame, self.variant)
    }
}

impl Drop for GlowChatScreen {
    fn drop(&mut self) {
        self.glow.unsubscribe(self.subscription);
        self.unmount();
    }
}

const SETTLE_MS: u64 = CROSSFADE_MS + PALETTE_SLOT_MS;

/// Replay a screen on a hand-driven clock: mount at monotonic 0 (wall clock `wall_start_ms`),
/// press the trigger at each `toggle_at_ms`, and tick every `step_ms` up to `at_ms`.
/// Returns the frame at `at_ms`.
///
/// Quiet stretches longer than a palette slot plus a fade are skipped in one jump, so the
/// cost depends on the number of toggles, not on `at_ms`.
pub fn simulate(
    at_ms: u64,
    wall_start_ms: u64,
    toggle_at_ms: &[u64],
    step_ms: u64,
    variant: GlowVariant,
) -> GlowFrame {
    let step_ms = step_ms.max(1);
    let clock = Arc::new(ManualClock::new(0, wall_start_ms));
    let mut screen = GlowChatScreen::new(clock.clone(), variant);
    screen.mount();

    let mut toggles: Vec<u64> = toggle_at_ms.iter().copied().filter(|t| *t <= at_ms).collect();
    toggles.sort_unstable();
    let mut pending = toggles.into_iter().peekable();

    let mut now = 0;
    loop {
        while pending.next_if(|t| *t <= now).is_some() {
            screen.toggle();
        }
        screen.advance();
        if now >= at_ms {
            break;
        }
        let next_event = pending.peek().copied().unwrap_or(at_ms);
        let mut next = now.saturating_add(step_ms).min(next_event);
        // Only the last fade and palette slot before an event can show in its frame.
        let horizon = next_event.saturating_sub(SETTLE_MS);
        if horizon > next {
            next = horizon;
        }
        clock.advance(next - now);
        now = next;
    }
    screen.frame()
}
