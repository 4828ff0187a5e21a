//! Render description: what the screen shows, independent of how it gets painted.

use crate::core::glow::palette::{BLACK, Rgba, WHITE};
use crate::core::glow::{GlowFrame, GlowVariant};

use super::messages::ChatMessage;

pub const SCREEN_BACKGROUND: Rgba = BLACK;
pub const OUTGOING_FILL: Rgba = Rgba::opaque(0x00, 0x00, 0xFF);
const GRAY: f32 = 0x88 as f32 / 255.0;
const DARK_GRAY: f32 = 0x44 as f32 / 255.0;
pub const INCOMING_FILL: Rgba = Rgba::new(GRAY, GRAY, GRAY, 0.3);
pub const MESSAGE_TEXT: Rgba = WHITE;
pub const TIMESTAMP_TEXT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.7);
pub const INPUT_FILL: Rgba = Rgba::new(DARK_GRAY, DARK_GRAY, DARK_GRAY, 0.5);
pub const INPUT_BORDER: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.3);
pub const PLACEHOLDER_TEXT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.7);

pub const INPUT_PLACEHOLDER: &str = "Message...";
pub const TRIGGER_LABEL: &str = "AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Plain(Rgba),
    Glow {
        /// Glow color with the breathing alpha already applied.
        color: Rgba,
        variant: GlowVariant,
    },
}

impl Background {
    /// Opaque color at a point where the glow has the given strength (see
    /// [`GlowVariant::falloff`]).
    pub fn color_at(&self, strength: f32) -> Rgba {
        match *self {
            Background::Plain(color) => color.over(SCREEN_BACKGROUND),
            Background::Glow { color, .. } => color
                .with_alpha(color.a * strength.clamp(0.0, 1.0))
                .over(SCREEN_BACKGROUND),
        }
    }

    pub fn variant(&self) -> Option<GlowVariant> {
        match self {
            Background::Plain(_) => None,
            Background::Glow { variant, .. } => Some(*variant),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleView<'a> {
    pub text: &'a str,
    pub timestamp: &'a str,
    pub align: Align,
    pub fill: Rgba,
    pub text_color: Rgba,
    pub timestamp_color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub placeholder: &'static str,
    pub fill: Rgba,
    pub border: Rgba,
    pub text_color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub fill: Rgba,
    pub text_color: Rgba,
    pub bold: bool,
}

/// Whole screen, top to bottom: background, message list, then input row with the trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView<'a> {
    pub background: Background,
    pub bubbles: Vec<BubbleView<'a>>,
    pub input: InputView,
    pub button: ButtonView,
}

/// Project messages and the current glow frame into a [`ScreenView`]. Pure.
///
/// Inactive glow shows the plain background even while the color is still fading out.
pub fn compose<'a>(
    messages: &'a [ChatMessage],
    frame: &GlowFrame,
    variant: GlowVariant,
) -> ScreenView<'a> {
    let background = if frame.active {
        Background::Glow {
            color: frame.effective_color(),
            variant,
        }
    } else {
        Background::Plain(SCREEN_BACKGROUND)
    };

    let bubbles = messages.iter().map(bubble).collect();

    ScreenView {
        background,
        bubbles,
        input: InputView {
            placeholder: INPUT_PLACEHOLDER,
            fill: INPUT_FILL,
            border: INPUT_BORDER,
            text_color: PLACEHOLDER_TEXT,
        },
        button: ButtonView {
            label: TRIGGER_LABEL,
            fill: WHITE,
            text_color: BLACK,
            bold: true,
        },
    }
}

fn bubble(message: &ChatMessage) -> BubbleView<'_> {
    let (align, fill) = if message.is_from_other_party {
        (Align::Start, INCOMING_FILL)
    } else {
        (Align::End, OUTGOING_FILL)
    };
    BubbleView {
        text: &message.text,
        timestamp: &message.timestamp_label,
        align,
        fill,
        text_color: MESSAGE_TEXT,
        timestamp_color: TIMESTAMP_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::super::messages::sample_messages;
    use super::*;
    use crate::core::glow::palette::{PALETTE, TRANSPARENT};

    fn active_frame() -> GlowFrame {
        GlowFrame {
            active: true,
            alpha: 0.8,
            color: PALETTE[2],
        }
    }

    #[test]
    fn sample_bubbles_in_order_with_alignment() {
        let messages = sample_messages();
        let view = compose(&messages, &GlowFrame::IDLE, GlowVariant::Edge);
        assert_eq!(view.bubbles.len(), 3);
        assert_eq!(view.bubbles[0].text, "Hello! How can I help you today?");
        assert!(view.bubbles[1].text.starts_with("I'm working on something amazing"));
        assert_eq!(
            view.bubbles[2].text,
            "The Apple Intelligence effect looks stunning!"
        );
        let aligns: Vec<Align> = view.bubbles.iter().map(|b| b.align).collect();
        assert_eq!(aligns, [Align::Start, Align::End, Align::Start]);
        assert_eq!(view.bubbles[1].fill, OUTGOING_FILL);
        assert_eq!(view.bubbles[0].fill, INCOMING_FILL);
        assert!(view.bubbles[0].fill.a < 1.0);
        assert_eq!(view.bubbles[2].timestamp, "10:32 AM");
    }

    #[test]
    fn inactive_glow_is_plain_background() {
        let messages = sample_messages();
        let frame = GlowFrame {
            active: false,
            alpha: 0.7,
            color: PALETTE[0].with_alpha(0.4),
        };
        let view = compose(&messages, &frame, GlowVariant::Gradient);
        assert_eq!(view.background, Background::Plain(SCREEN_BACKGROUND));
        assert_eq!(view.background.color_at(1.0), BLACK);
        assert_eq!(view.background.variant(), None);
    }

    #[test]
    fn active_glow_carries_breathing_alpha() {
        let view = compose(&[], &active_frame(), GlowVariant::Gradient);
        match view.background {
            Background::Glow { color, variant } => {
                assert_eq!(variant, GlowVariant::Gradient);
                assert!((color.a - 0.8).abs() < 1e-6);
                assert_eq!(color.with_alpha(1.0), PALETTE[2]);
            }
            other => panic!("expected glow, got {:?}", other),
        }
        assert!(view.bubbles.is_empty());
    }

    #[test]
    fn glow_background_fades_with_strength() {
        let bg = Background::Glow {
            color: PALETTE[0].with_alpha(0.8),
            variant: GlowVariant::Edge,
        };
        assert_eq!(bg.color_at(0.0), BLACK);
        let strong = bg.color_at(1.0).to_rgb8();
        let weak = bg.color_at(0.5).to_rgb8();
        assert!(strong.2 > weak.2);

        let faded_out = Background::Glow {
            color: TRANSPARENT,
            variant: GlowVariant::Edge,
        };
        assert_eq!(faded_out.color_at(1.0), BLACK);
    }

    #[test]
    fn input_row_labels() {
        let view = compose(&[], &GlowFrame::IDLE, GlowVariant::Edge);
        assert_eq!(view.input.placeholder, "Message...");
        assert!(view.input.fill.a < 1.0);
        assert_eq!(view.button.label, "AI");
        assert!(view.button.bold);
    }
}
