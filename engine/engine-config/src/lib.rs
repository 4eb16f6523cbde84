//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared by the
//! arena binary and anything else that drives the search engine.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`LOOKAHEAD_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! LOOKAHEAD_<SECTION>_<KEY>=value
//!
//! Examples:
//!     LOOKAHEAD_COMMON_SEED=42
//!     LOOKAHEAD_SEARCH_STRATEGY=expectimax
//!     LOOKAHEAD_SEARCH_MAX_DEPTH=3
//!     LOOKAHEAD_GHOST_POLICY=minimax
//!     LOOKAHEAD_ARENA_LAYOUT=open
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
