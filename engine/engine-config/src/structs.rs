//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> Option<u64> {
    defaults::seed()
}
fn d_strategy() -> String {
    defaults::strategy().into()
}
fn d_max_depth() -> u32 {
    defaults::max_depth()
}
fn d_ghost_policy() -> String {
    defaults::ghost_policy().into()
}
fn d_ghost_depth() -> u32 {
    defaults::ghost_depth()
}
fn d_prob_attack() -> f64 {
    defaults::prob_attack()
}
fn d_game() -> String {
    defaults::game().into()
}
fn d_layout() -> String {
    defaults::layout().into()
}
fn d_episodes() -> u32 {
    defaults::episodes()
}
fn d_max_turns() -> u32 {
    defaults::max_turns()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub ghost: GhostConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// RNG seed; `None` seeds from OS entropy.
    #[serde(default = "d_seed")]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Search settings for the protagonist
///
/// `strategy` is kept as text here and parsed by the consumer, so an unknown
/// name is reported where it is used.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchSection {
    #[serde(default = "d_strategy")]
    pub strategy: String,
    #[serde(default = "d_max_depth")]
    pub max_depth: u32,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            strategy: defaults::strategy().into(),
            max_depth: defaults::max_depth(),
        }
    }
}

/// How adversaries pick their moves
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GhostConfig {
    /// `minimax`, `directional` or `random`.
    #[serde(default = "d_ghost_policy")]
    pub policy: String,
    /// Lookahead depth for minimax ghosts.
    #[serde(default = "d_ghost_depth")]
    pub depth: u32,
    /// Mass a directional ghost puts on closing in.
    #[serde(default = "d_prob_attack")]
    pub prob_attack: f64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            policy: defaults::ghost_policy().into(),
            depth: defaults::ghost_depth(),
            prob_attack: defaults::prob_attack(),
        }
    }
}

/// Episode runner settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_game")]
    pub game: String,
    #[serde(default = "d_layout")]
    pub layout: String,
    #[serde(default = "d_episodes")]
    pub episodes: u32,
    #[serde(default = "d_max_turns")]
    pub max_turns: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            game: defaults::game().into(),
            layout: defaults::layout().into(),
            episodes: defaults::episodes(),
            max_turns: defaults::max_turns(),
        }
    }
}
