//! Runtime configuration from environment variables (optionally loaded from `.env`).
//!
//! | Variable             | Values              | Default |
//! |----------------------|---------------------|---------|
//! | `GLOW_CHAT_VARIANT`  | `gradient`, `edge`  | `edge`  |
//! | `GLOW_CHAT_FRAME_MS` | 8..=1000            | 33      |
//! | `GLOW_CHAT_MOUSE`    | `1`/`true`, `0`/`false` | `1` |

use std::env;

use serde::Serialize;

use crate::core::glow::GlowVariant;

pub const VARIANT_ENV: &str = "GLOW_CHAT_VARIANT";
pub const FRAME_MS_ENV: &str = "GLOW_CHAT_FRAME_MS";
pub const MOUSE_ENV: &str = "GLOW_CHAT_MOUSE";

/// Accepted frame interval range (milliseconds).
pub const FRAME_MS_MIN: u64 = 8;
pub const FRAME_MS_MAX: u64 = 1000;
const DEFAULT_FRAME_MS: u64 = 33;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Visual rendition of the glow.
    pub variant: GlowVariant,
    /// Interval between animation frames.
    pub frame_interval_ms: u64,
    /// Capture mouse events (click on the trigger button, wheel scroll).
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: GlowVariant::Edge,
            frame_interval_ms: DEFAULT_FRAME_MS,
            mouse: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GLOW_CHAT_VARIANT: {0}")]
    InvalidVariant(#[from] crate::core::glow::ParseVariantError),

    #[error("GLOW_CHAT_FRAME_MS must be an integer between 8 and 1000, got '{0}'")]
    InvalidFrameInterval(String),

    #[error("GLOW_CHAT_MOUSE must be 1/true or 0/false, got '{0}'")]
    InvalidMouse(String),
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup. Unset variables keep their defaults.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(raw) = lookup(VARIANT_ENV) {
        config.variant = raw.trim().parse()?;
    }

    if let Some(raw) = lookup(FRAME_MS_ENV) {
        config.frame_interval_ms = parse_frame_interval(&raw)?;
    }

    if let Some(raw) = lookup(MOUSE_ENV) {
        config.mouse = parse_bool(&raw).ok_or(ConfigError::InvalidMouse(raw))?;
    }

    Ok(config)
}

/// Parse and bounds-check a frame interval in milliseconds.
pub fn parse_frame_interval(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| (FRAME_MS_MIN..=FRAME_MS_MAX).contains(ms))
        .ok_or_else(|| ConfigError::InvalidFrameInterval(raw.to_string()))
}

fn parse_bool(raw: &str) -> Option<bool> {
    let s = raw.trim();
    if s == "1" || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s == "0" || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_from(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.variant, GlowVariant::Edge);
        assert_eq!(config.frame_interval_ms, 33);
        assert!(config.mouse);
    }

    #[test]
    fn reads_all_variables() {
        let config = load_with(&[
            (VARIANT_ENV, "Gradient"),
            (FRAME_MS_ENV, " 16 "),
            (MOUSE_ENV, "false"),
        ])
        .unwrap();
        assert_eq!(config.variant, GlowVariant::Gradient);
        assert_eq!(config.frame_interval_ms, 16);
        assert!(!config.mouse);
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = load_with(&[(VARIANT_ENV, "sparkle")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVariant(_)));
        assert!(err.to_string().contains(VARIANT_ENV));
    }

    #[test]
    fn rejects_out_of_range_frame_interval() {
        for raw in ["0", "7", "1001", "fast"] {
            let err = load_with(&[(FRAME_MS_ENV, raw)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidFrameInterval(ref s) if s == raw),
                "{raw}: {err}"
            );
        }
        assert_eq!(parse_frame_interval("8").unwrap(), 8);
        assert_eq!(parse_frame_interval("1000").unwrap(), 1000);
    }

    #[test]
    fn rejects_invalid_mouse_flag() {
        let err = load_with(&[(MOUSE_ENV, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMouse(_)));
    }
}
