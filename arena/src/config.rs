//! Configuration for the arena binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use adversarial::Strategy;
use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use games_pursuit::{Layout, BUILTIN_NAMES};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_game() -> String {
    CENTRAL_CONFIG.arena.game.clone()
}

fn default_layout() -> String {
    CENTRAL_CONFIG.arena.layout.clone()
}

fn default_episodes() -> u32 {
    CENTRAL_CONFIG.arena.episodes
}

fn default_max_turns() -> u32 {
    CENTRAL_CONFIG.arena.max_turns
}

fn default_strategy() -> String {
    CENTRAL_CONFIG.search.strategy.clone()
}

fn default_depth() -> u32 {
    CENTRAL_CONFIG.search.max_depth
}

fn default_ghost_policy() -> String {
    CENTRAL_CONFIG.ghost.policy.clone()
}

fn default_ghost_depth() -> u32 {
    CENTRAL_CONFIG.ghost.depth
}

fn default_prob_attack() -> f64 {
    CENTRAL_CONFIG.ghost.prob_attack
}

/// Game played by the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Pursuit,
    TicTacToe,
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pursuit" => Ok(Game::Pursuit),
            "tictactoe" => Ok(Game::TicTacToe),
            _ => Err(anyhow!(
                "unknown game '{}', expected pursuit or tictactoe",
                s
            )),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::Pursuit => f.write_str("pursuit"),
            Game::TicTacToe => f.write_str("tictactoe"),
        }
    }
}

/// How chasers pick their moves in pursuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostKind {
    /// Depth-limited minimax on the chaser's own objective.
    Minimax,
    /// Biased towards closing in on the runner.
    Directional,
    /// Uniform over legal moves.
    Random,
}

impl FromStr for GhostKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(GhostKind::Minimax),
            "directional" => Ok(GhostKind::Directional),
            "random" => Ok(GhostKind::Random),
            _ => Err(anyhow!(
                "unknown ghost policy '{}', expected minimax, directional or random",
                s
            )),
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "arena")]
#[command(about = "Lookahead arena - runs episodes between search agents")]
#[command(
    long_about = "Plays a number of episodes of pursuit (a search-driven runner against
chasers) or tictactoe (search agent against search agent) and prints
aggregate statistics as JSON.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to play (pursuit, tictactoe)
    #[arg(long, default_value_t = default_game())]
    pub game: String,

    /// Built-in pursuit layout (tiny, corridor, open, trapped)
    #[arg(long, default_value_t = default_layout())]
    pub layout: String,

    /// Number of episodes to play
    #[arg(long, default_value_t = default_episodes())]
    pub episodes: u32,

    /// Agent moves before an episode is cut off
    #[arg(long, default_value_t = default_max_turns())]
    pub max_turns: u32,

    /// Search strategy (minimax, alpha_beta, expectimax)
    #[arg(long, default_value_t = default_strategy())]
    pub strategy: String,

    /// Search depth in full turn cycles
    #[arg(long, default_value_t = default_depth())]
    pub depth: u32,

    /// Chaser policy for pursuit (minimax, directional, random)
    #[arg(long, default_value_t = default_ghost_policy())]
    pub ghost_policy: String,

    /// Lookahead depth for minimax chasers
    #[arg(long, default_value_t = default_ghost_depth())]
    pub ghost_depth: u32,

    /// Probability mass a directional chaser puts on closing in
    #[arg(long, default_value_t = default_prob_attack())]
    pub prob_attack: f64,

    /// RNG seed (defaults to the configured seed, else OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let game = self.game()?;

        if game == Game::Pursuit {
            self.ghost_kind()?;
            if !BUILTIN_NAMES.contains(&self.layout.as_str()) {
                return Err(anyhow!(
                    "unknown layout '{}', expected one of {}",
                    self.layout,
                    BUILTIN_NAMES.join(", ")
                ));
            }
        }

        self.strategy()?;

        if self.episodes == 0 {
            return Err(anyhow!("episodes must be greater than 0"));
        }

        if self.max_turns == 0 {
            return Err(anyhow!("max_turns must be greater than 0"));
        }

        if !(0.0..=1.0).contains(&self.prob_attack) {
            return Err(anyhow!(
                "prob_attack must be between 0 and 1, got {}",
                self.prob_attack
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn game(&self) -> Result<Game> {
        self.game.parse()
    }

    pub fn strategy(&self) -> Result<Strategy> {
        Ok(self.strategy.parse::<Strategy>()?)
    }

    pub fn ghost_kind(&self) -> Result<GhostKind> {
        self.ghost_policy.parse()
    }

    pub fn layout(&self) -> Result<Layout> {
        Ok(Layout::builtin(&self.layout)?)
    }

    /// Seed from the command line, else from config.toml / environment.
    pub fn seed(&self) -> Option<u64> {
        self.seed.or(CENTRAL_CONFIG.common.seed)
    }
}
