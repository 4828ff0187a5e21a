//! Glow animation core: toggle state, breathing pulse, palette rotation and cross-fade.
//!
//! Nothing here knows about terminals. [`GlowAnimator`] turns a clock reading and the toggle
//! state into a [`GlowFrame`]; the host decides when to ask and how to paint it.

pub mod breathe;
pub mod crossfade;
pub mod easing;
pub mod palette;
pub mod state;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::clock::Clock;

use self::breathe::BreathingDriver;
use self::crossfade::CrossFader;
use self::palette::{Rgba, TRANSPARENT, target_color};

/// How the glow is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowVariant {
    /// Diagonal linear gradient from the top-left corner, fading out toward the bottom-right.
    Gradient,
    /// Halo hugging the screen border, fading out toward the center.
    Edge,
}

/// Rows of falloff for the edge halo. Columns count half (terminal cells are about 1:2).
const EDGE_DEPTH_ROWS: f32 = 3.0;

impl GlowVariant {
    /// Glow strength in `[0, 1]` at cell (`x`, `y`) of a `width` x `height` area.
    pub fn falloff(self, x: u16, y: u16, width: u16, height: u16) -> f32 {
        if width == 0 || height == 0 || x >= width || y >= height {
            return 0.0;
        }
        match self {
            GlowVariant::Gradient => {
                let fx = x as f32 / width.saturating_sub(1).max(1) as f32;
                let fy = y as f32 / height.saturating_sub(1).max(1) as f32;
                (1.0 - (fx + fy) / 2.0).clamp(0.0, 1.0)
            }
            GlowVariant::Edge => {
                let dx = x.min(width - 1 - x) as f32 / 2.0;
                let dy = y.min(height - 1 - y) as f32;
                let d = dx.min(dy);
                (1.0 - d / EDGE_DEPTH_ROWS).max(0.0)
            }
        }
    }
}

impl fmt::Display for GlowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlowVariant::Gradient => write!(f, "gradient"),
            GlowVariant::Edge => write!(f, "edge"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown glow variant '{0}' (expected 'gradient' or 'edge')")]
pub struct ParseVariantError(String);

impl FromStr for GlowVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gradient" | "linear" => Ok(GlowVariant::Gradient),
            "edge" | "radial" => Ok(GlowVariant::Edge),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Animation values for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowFrame {
    pub active: bool,
    /// Breathing alpha in `[0.3, 0.8]`.
    pub alpha: f32,
    /// Cross-faded glow color (its own alpha is the fade progress).
    pub color: Rgba,
}

impl GlowFrame {
    pub const IDLE: GlowFrame = GlowFrame {
        active: false,
        alpha: breathe::BREATHE_MIN,
        color: TRANSPARENT,
    };

    /// Color with the breathing alpha applied.
    pub fn effective_color(&self) -> Rgba {
        self.color.with_alpha(self.color.a * self.alpha)
    }
}

/// Breathing driver plus cross-fader, bound to a mount.
///
/// While unmounted [`GlowAnimator::tick`] returns `None` and touches nothing.
#[derive(Debug)]
pub struct GlowAnimator {
    breathing: BreathingDriver,
    fader: CrossFader,
}

impl Default for GlowAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl GlowAnimator {
    pub fn new() -> Self {
        Self {
            breathing: BreathingDriver::default(),
            fader: CrossFader::new(TRANSPARENT),
        }
    }

    /// Start breathing from the current instant; the displayed color starts transparent.
    pub fn mount(&mut self, clock: &dyn Clock) {
        self.breathing.start(clock.monotonic_ms());
        self.fader = CrossFader::new(TRANSPARENT);
    }

    pub fn unmount(&mut self) {
        self.breathing.stop();
    }

    pub fn is_mounted(&self) -> bool {
        self.breathing.is_running()
    }

    /// Derive this frame's values and retarget the fade if the palette slot or toggle changed.
    pub fn tick(&mut self, clock: &dyn Clock, active: bool) -> Option<GlowFrame> {
        let now = clock.monotonic_ms();
        let alpha = self.breathing.sample(now)?;
        let target = target_color(active, clock.wall_ms());
        if self.fader.retarget(target, now) {
            log::trace!("Glow fading to {}", target);
        }
        Some(GlowFrame {
            active,
            alpha,
            color: self.fader.sample(now),
        })
    }
}
