//! Breathing driver: the glow alpha pulse.

use super::easing::Easing;

pub const BREATHE_MIN: f32 = 0.3;
pub const BREATHE_MAX: f32 = 0.8;

/// Duration of one leg (min to max, or back).
pub const BREATHE_LEG_MS: u64 = 2_000;

/// Alpha at `elapsed_ms` after mount. Starts at [`BREATHE_MIN`], reaches [`BREATHE_MAX`]
/// after one leg, comes back after two, and repeats.
pub fn breathe_alpha(elapsed_ms: u64) -> f32 {
    let phase = elapsed_ms % (2 * BREATHE_LEG_MS);
    let (leg_ms, rising) = if phase < BREATHE_LEG_MS {
        (phase, true)
    } else {
        (phase - BREATHE_LEG_MS, false)
    };
    let t = Easing::Linear.apply(leg_ms as f32 / BREATHE_LEG_MS as f32);
    let t = if rising { t } else { 1.0 - t };
    BREATHE_MIN + (BREATHE_MAX - BREATHE_MIN) * t
}

/// Breathing pulse bound to a mount: produces values only between `start` and `stop`.
#[derive(Debug, Default)]
pub struct BreathingDriver {
    started_at: Option<u64>,
}

impl BreathingDriver {
    pub fn start(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current alpha, or `None` when stopped.
    pub fn sample(&self, now_ms: u64) -> Option<f32> {
        self.started_at
            .map(|start| breathe_alpha(now_ms.saturating_sub(start)))
    }
}
