//! Colors and the clock-driven palette rotation.

use std::fmt;

use serde::{Serialize, Serializer};

/// Straight (non-premultiplied) RGBA, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

/// Glow colors, cycled in this order.
pub const PALETTE: [Rgba; 6] = [
    Rgba::opaque(0x66, 0x7E, 0xEA),
    Rgba::opaque(0x8E, 0x44, 0xAD),
    Rgba::opaque(0xE7, 0x4C, 0x3C),
    Rgba::opaque(0xF3, 0x9C, 0x12),
    Rgba::opaque(0x2E, 0xCC, 0x71),
    Rgba::opaque(0x34, 0x98, 0xDB),
];

/// How long each palette entry is held.
pub const PALETTE_SLOT_MS: u64 = 3_000;

/// Full rotation through the palette.
pub const PALETTE_PERIOD_MS: u64 = PALETTE_SLOT_MS * PALETTE.len() as u64;

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Component-wise interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Composite `self` over an opaque `background`; the result is opaque.
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: f32, bg: f32| fg * a + bg * (1.0 - a);
        Rgba::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
            1.0,
        )
    }

    /// 8-bit channels, rounded.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    fn alpha8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        let a = self.alpha8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Palette index shown at wall-clock time `wall_ms`.
pub fn palette_index(wall_ms: u64) -> usize {
    ((wall_ms % PALETTE_PERIOD_MS) / PALETTE_SLOT_MS) as usize
}

/// Color the glow should be heading to: transparent when inactive, else the palette slot
/// for the current wall-clock time. Deterministic for a given clock.
pub fn target_color(active: bool, wall_ms: u64) -> Rgba {
    if active {
        PALETTE[palette_index(wall_ms)]
    } else {
        TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_hex_literals() {
        let hex: Vec<String> = PALETTE.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            hex,
            ["#667EEA", "#8E44AD", "#E74C3C", "#F39C12", "#2ECC71", "#3498DB"]
        );
    }

    #[test]
    fn inactive_target_is_always_transparent() {
        for t in [0, 1, 2_999, 3_000, 17_999, 18_000, 1_700_000_000_123] {
            assert_eq!(target_color(false, t), TRANSPARENT);
        }
    }

    #[test]
    fn active_target_rotates_every_slot() {
        assert_eq!(target_color(true, 0), PALETTE[0]);
        assert_eq!(target_color(true, 2_999), PALETTE[0]);
        assert_eq!(target_color(true, 3_000), PALETTE[1]);
        assert_eq!(target_color(true, 15_000), PALETTE[5]);
        assert_eq!(target_color(true, 18_000), PALETTE[0]);
        for i in 0..PALETTE.len() as u64 {
            assert_eq!(palette_index(i * PALETTE_SLOT_MS + 1_500), i as usize);
        }
    }

    #[test]
    fn rotation_has_period_of_eighteen_seconds() {
        assert_eq!(PALETTE_PERIOD_MS, 18_000);
        for t in (0..40_000).step_by(700) {
            assert_eq!(palette_index(t), palette_index(t + PALETTE_PERIOD_MS));
        }
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(PALETTE[5].to_string(), "#3498DB");
        assert_eq!(WHITE.with_alpha(128.0 / 255.0).to_string(), "#FFFFFF80");
        assert_eq!(TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn lerp_and_over() {
        let mid = BLACK.lerp(WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(BLACK.lerp(WHITE, 2.0), WHITE);

        let red = Rgba::opaque(255, 0, 0).with_alpha(0.5);
        let out = red.over(BLACK);
        assert_eq!(out.to_rgb8(), (128, 0, 0));
        assert_eq!(out.a, 1.0);
        assert_eq!(TRANSPARENT.over(WHITE), WHITE);
    }
}
