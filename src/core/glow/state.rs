//! Glow toggle state with change notification.

use std::fmt;

/// Handle returned by [`GlowState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(bool)>;

/// Whether the glow is on. Flipped only by [`GlowState::toggle`]; every flip is pushed to the
/// subscribers so the host can schedule a redraw.
#[derive(Default)]
pub struct GlowState {
    active: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl GlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the state and notify subscribers. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        log::debug!("Glow toggled {}", if self.active { "on" } else { "off" });
        let active = self.active;
        for (_, listener) in &mut self.listeners {
            listener(active);
        }
        active
    }

    /// Back to inactive without notifying (screen teardown).
    pub fn reset(&mut self) {
        self.active = false;
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(bool) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for GlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlowState")
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
