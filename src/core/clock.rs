//! Time sources for the glow animation.
//!
//! The animation reads two clocks: a monotonic one (elapsed time since mount, tween progress)
//! and the wall clock (palette rotation). Both are behind [`Clock`] so tests and the `frame`
//! subcommand can drive time by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub trait Clock: Send + Sync {
    /// Milliseconds on a monotonic timeline (origin is arbitrary but fixed).
    fn monotonic_ms(&self) -> u64;

    /// Milliseconds since the Unix epoch.
    fn wall_ms(&self) -> u64;
}

/// Real clocks: `Instant` for monotonic time, chrono for the wall clock.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wall_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Hand-driven clock. `advance` moves both timelines together.
#[derive(Default)]
pub struct ManualClock {
    monotonic: AtomicU64,
    wall: AtomicU64,
}

impl ManualClock {
    pub fn new(monotonic_ms: u64, wall_ms: u64) -> Self {
        Self {
            monotonic: AtomicU64::new(monotonic_ms),
            wall: AtomicU64::new(wall_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.monotonic.fetch_add(ms, Ordering::SeqCst);
        self.wall.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn monotonic_ms(&self) -> u64 {
        self.monotonic.load(Ordering::SeqCst)
    }

    fn wall_ms(&self) -> u64 {
        self.wall.load(Ordering::SeqCst)
    }
}
