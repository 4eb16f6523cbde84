//! Default configuration values loaded from config.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time, so
//! the binary and the documented defaults cannot drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    ghost: GhostDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    strategy: String,
    max_depth: u32,
}

#[derive(Debug, Deserialize)]
struct GhostDefaults {
    policy: String,
    depth: u32,
    prob_attack: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    game: String,
    layout: String,
    episodes: u32,
    max_turns: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> Option<u64> {
    DEFAULTS.common.seed
}

// Search
pub fn strategy() -> &'static str {
    &DEFAULTS.search.strategy
}
pub fn max_depth() -> u32 {
    DEFAULTS.search.max_depth
}

// Ghost
pub fn ghost_policy() -> &'static str {
    &DEFAULTS.ghost.policy
}
pub fn ghost_depth() -> u32 {
    DEFAULTS.ghost.depth
}
pub fn prob_attack() -> f64 {
    DEFAULTS.ghost.prob_attack
}

// Arena
pub fn game() -> &'static str {
    &DEFAULTS.arena.game
}
pub fn layout() -> &'static str {
    &DEFAULTS.arena.layout
}
pub fn episodes() -> u32 {
    DEFAULTS.arena.episodes
}
pub fn max_turns() -> u32 {
    DEFAULTS.arena.max_turns
}
