//! Grid pursuit game for the Lookahead engine
//!
//! One runner (agent 0) collects pellets on a walled grid while one or more
//! chasers (agents 1..) try to land on its cell. Every runner move costs a
//! point, every pellet is worth ten, clearing the board wins and being caught
//! loses. The state implements [`GameState`](engine_core::GameState), so any
//! search strategy can drive the runner or a chaser.
//!
//! # Usage
//!
//! ```rust
//! use adversarial::{choose_action, Strategy};
//! use games_pursuit::{pellet_distance_evaluation, Layout, PursuitState};
//!
//! let state = PursuitState::new(&Layout::builtin("corridor").unwrap());
//! let decision = choose_action(
//!     Strategy::AlphaBeta,
//!     &state,
//!     2,
//!     &pellet_distance_evaluation,
//!     0,
//! )
//! .unwrap();
//! assert!(!decision.is_noop());
//! ```

pub mod eval;
pub mod layout;
pub mod policy;
pub mod state;

pub use eval::{chaser_evaluation, pellet_distance_evaluation, CAPTURE_VALUE};
pub use layout::{Grid, Layout, LayoutError, Pos, BUILTIN_NAMES};
pub use policy::{DirectionalChaser, RandomChaser, DEFAULT_PROB_ATTACK};
pub use state::{
    Direction, PursuitState, CAUGHT_PENALTY, PELLET_REWARD, TIME_PENALTY, WIN_REWARD,
};

#[cfg(test)]
mod tests;
