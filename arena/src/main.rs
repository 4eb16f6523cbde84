//! Arena - episode runner for the Lookahead search engine
//!
//! Plays a configurable number of episodes and reports how the searching
//! agent fared:
//! 1. Pursuit: a search-driven runner against minimax, directional or random
//!    chasers on a built-in layout
//! 2. TicTacToe: a search agent against another search agent
//!
//! Aggregate statistics are printed to stdout as JSON when the run finishes.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

mod arena;
mod config;
mod stats;

use crate::arena::Arena;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");
    info!(
        game = %config.game,
        layout = %config.layout,
        ghost_policy = %config.ghost_policy,
        seed = ?config.seed(),
        "Arena configured"
    );

    let mut arena = Arena::new(config)?;
    if let Err(e) = arena.run() {
        error!("Arena failed: {:#}", e);
        return Err(e);
    }

    let json = arena
        .stats()
        .to_json()
        .context("Failed to serialize arena stats")?;
    println!("{}", json);

    info!("Arena completed successfully");
    Ok(())
}
