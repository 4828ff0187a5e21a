//! Cross-fader: eases the displayed glow color toward its latest target.

use super::easing::Easing;
use super::palette::Rgba;

pub const CROSSFADE_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct CrossFader {
    from: Rgba,
    target: Rgba,
    started_at: u64,
    duration_ms: u64,
    easing: Easing,
}

impl CrossFader {
    /// Fader resting on `initial` (no tween in flight).
    pub fn new(initial: Rgba) -> Self {
        Self {
            from: initial,
            target: initial,
            started_at: 0,
            duration_ms: CROSSFADE_MS,
            easing: Easing::FAST_OUT_SLOW_IN,
        }
    }

    /// Point the fade at `target`. A no-op when it is already the target; otherwise the new
    /// tween starts from the color displayed at `now_ms`, so retargeting mid-fade never jumps.
    pub fn retarget(&mut self, target: Rgba, now_ms: u64) -> bool {
        if target == self.target {
            return false;
        }
        self.from = self.sample(now_ms);
        self.target = target;
        self.started_at = now_ms;
        true
    }

    /// Displayed color at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> Rgba {
        if self.from == self.target {
            return self.target;
        }
        let elapsed = now_ms.saturating_sub(self.started_at);
        if elapsed >= self.duration_ms {
            return self.target;
        }
        let t = self.easing.apply(elapsed as f32 / self.duration_ms as f32);
        self.from.lerp(self.target, t)
    }
}
