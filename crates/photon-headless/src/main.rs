//! Headless PHOTON runner.
//!
//! Plays a scripted match with both engines and no renderer, logging
//! progress and optionally printing the final snapshot as JSON.

mod director;
mod game_loop;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use photon_core::config::ArenaConfig;
use photon_core::error::ConfigError;

use crate::game_loop::LoopSettings;

/// Headless PHOTON runner - scripted match without a renderer
#[derive(Parser, Debug)]
#[command(name = "photon-headless")]
#[command(about = "Run a scripted PHOTON match and report the result")]
struct Args {
    /// TOML configuration file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Match time limit in seconds
    #[arg(long, default_value_t = 300.0)]
    seconds: f64,

    /// Simulated frame rate; frame time is capped at 0.1 s
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), ConfigError> {
    init_tracing();
    let args = Args::parse();

    let raw = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    let config = raw.validate()?;
    info!(
        scheme = %config.scheme.id,
        units = config.enabled_units.len(),
        particles = config.particle_count,
        "configuration loaded"
    );

    let outcome = game_loop::run_match(
        &config,
        LoopSettings {
            fps: args.fps,
            max_seconds: args.seconds,
            realtime: args.realtime,
        },
    );

    match outcome.winner {
        Some(winner) => info!(?winner, frames = outcome.frames, "match won"),
        None => info!(frames = outcome.frames, "time limit reached without a winner"),
    }

    if args.snapshot {
        match serde_json::to_string_pretty(&outcome.snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => error!(%err, "failed to serialize final snapshot"),
        }
    }
    Ok(())
}
