//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::glow::GlowVariant;

pub use clap_complete::generate;

const EXAMPLES: &str = "\
EXAMPLES:
  glow-chat                                Launch the chat screen
  glow-chat --variant gradient             Use the diagonal gradient glow
  glow-chat frame --at-ms 2000 --active    Print the glow frame 2 s after pressing AI
  glow-chat config                         Show resolved configuration and log path
  glow-chat completions bash               Generate bash completions
";

fn after_help() -> String {
    format!("{}\n{}", EXAMPLES, crate::tui::key_help())
}

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Chat screen demo with an animated, color-cycling glow",
    after_help = after_help()
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Glow rendition (overrides GLOW_CHAT_VARIANT)
    #[arg(long, global = true, help = "Glow variant: gradient or edge")]
    pub variant: Option<GlowVariant>,

    /// Frame interval in milliseconds (overrides GLOW_CHAT_FRAME_MS)
    #[arg(long = "frame-ms", global = true, value_name = "MS")]
    pub frame_ms: Option<String>,

    /// Do not capture the mouse (overrides GLOW_CHAT_MOUSE)
    #[arg(long)]
    pub no_mouse: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the simulated glow frame at a point in time as JSON
    Frame {
        /// Milliseconds since the screen was mounted
        #[arg(long, value_name = "MS")]
        at_ms: u64,
        /// Press the AI button right after mounting
        #[arg(long)]
        active: bool,
        /// Press the AI button at this time (repeatable)
        #[arg(long = "toggle-at", value_name = "MS")]
        toggle_at: Vec<u64>,
        /// Wall-clock milliseconds at mount; selects the palette slot
        #[arg(long, value_name = "MS", default_value_t = 0)]
        wall_ms: u64,
        /// Simulation step (defaults to the frame interval)
        #[arg(long, value_name = "MS")]
        step_ms: Option<u64>,
    },
    /// Show resolved configuration and log path
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Whether this invocation opens the TUI.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_follows_flags() {
        let args = Args::parse_from(["glow-chat", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["glow-chat", "-q"]);
        assert_eq!(args.log_level(), "error");
        let args = Args::parse_from(["glow-chat"]);
        assert_eq!(args.log_level(), "warn");
        assert!(args.is_tui());
    }

    #[test]
    fn parses_frame_subcommand() {
        let args = Args::parse_from([
            "glow-chat",
            "frame",
            "--at-ms",
            "2500",
            "--toggle-at",
            "0",
            "--toggle-at",
            "1200",
            "--variant",
            "radial",
        ]);
        assert_eq!(args.variant, Some(GlowVariant::Edge));
        match args.command {
            Some(Commands::Frame {
                at_ms,
                active,
                toggle_at,
                wall_ms,
                step_ms,
            }) => {
                assert_eq!(at_ms, 2500);
                assert!(!active);
                assert_eq!(toggle_at, [0, 1200]);
                assert_eq!(wall_ms, 0);
                assert_eq!(step_ms, None);
            }
            _ => panic!("expected frame subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Args::try_parse_from(["glow-chat", "--variant", "sparkle"]).is_err());
    }
}
