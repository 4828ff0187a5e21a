//! # Glow Chat
//!
//! A single chat screen whose "AI" button toggles an animated glow: a breathing alpha pulse
//! over a color that cycles through a fixed palette, cross-fading between colors.
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - `frame`: deterministic glow frame at a given time, as JSON
//! - `config` and `completions` helpers

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load()
        .and_then(|config| run::apply_overrides(&args, config))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    log::debug!("Resolved config: {:?}", config);

    match args.command {
        Some(Commands::Frame {
            at_ms,
            active,
            toggle_at,
            wall_ms,
            step_ms,
        }) => run::print_frame(
            run::FrameRequest {
                at_ms,
                active,
                toggle_at,
                wall_ms,
                step_ms,
            },
            &config,
        ),
        Some(Commands::Config) => run::print_config(&config),
        Some(Commands::Completions { shell }) => {
            run::print_completions(shell);
            Ok(())
        }
        None => run::launch_tui(config).await,
    }
}
