//! Application run modes: logger init, TUI launch, frame simulation, config and completions.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{self, Args};
use crate::core;
use crate::core::config::Config;
use crate::core::glow::{GlowFrame, GlowVariant};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Apply command-line overrides on top of the environment configuration.
pub fn apply_overrides(
    args: &Args,
    mut config: Config,
) -> Result<Config, core::config::ConfigError> {
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(ref raw) = args.frame_ms {
        config.frame_interval_ms = core::config::parse_frame_interval(raw)?;
    }
    if args.no_mouse {
        config.mouse = false;
    }
    Ok(config)
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let handle = tokio::runtime::Handle::current();
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(&config, handle)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}

/// Output of the `frame` subcommand.
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub at_ms: u64,
    pub wall_ms: u64,
    pub variant: GlowVariant,
    #[serde(flatten)]
    pub frame: GlowFrame,
}

/// Parameters of a `frame` run.
pub struct FrameRequest {
    pub at_ms: u64,
    pub active: bool,
    pub toggle_at: Vec<u64>,
    pub wall_ms: u64,
    pub step_ms: Option<u64>,
}

/// Replay the screen on a manual clock and report the frame at `at_ms`.
pub fn simulate_frame(request: FrameRequest, config: &Config) -> FrameReport {
    let mut toggles = request.toggle_at;
    if request.active {
        toggles.push(0);
    }
    let step_ms = request.step_ms.unwrap_or(config.frame_interval_ms);
    log::debug!(
        "Simulating {} ms (step {} ms, toggles at {:?})",
        request.at_ms,
        step_ms,
        toggles
    );
    let frame = core::screen::simulate(
        request.at_ms,
        request.wall_ms,
        &toggles,
        step_ms,
        config.variant,
    );
    FrameReport {
        at_ms: request.at_ms,
        wall_ms: request.wall_ms.saturating_add(request.at_ms),
        variant: config.variant,
        frame,
    }
}

pub fn print_frame(
    request: FrameRequest,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = simulate_frame(request, config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    version: &'static str,
    #[serde(flatten)]
    config: &'a Config,
    log_file: Option<String>,
}

/// Print resolved configuration and log path as JSON.
pub fn print_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let report = ConfigReport {
        version: core::app::VERSION,
        config,
        log_file: core::paths::log_file().map(|p| p.display().to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}
