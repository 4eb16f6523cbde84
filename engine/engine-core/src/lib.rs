//! Core traits and types for the Lookahead search engine
//!
//! This crate provides the capability contract the search engine consumes:
//! - `GameState`: legal actions, successors, terminal status and score
//! - `Outcome`: terminal status from the protagonist's point of view
//! - `StateError`: precondition violations raised by a state
//! - `synthetic`: explicit-tree and cyclic states for tests and benchmarks

pub mod error;
pub mod state;
pub mod synthetic;

// Re-export main types for convenience
pub use error::StateError;
pub use state::{AgentIndex, GameState, Outcome, PROTAGONIST};
