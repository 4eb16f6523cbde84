//! Multi-agent adversarial game-tree search.
//!
//! This crate picks an action for one agent of a turn-based game by exploring
//! future states to a bounded depth. It works with any state implementing the
//! `engine-core` [`GameState`](engine_core::GameState) trait.
//!
//! # Strategies
//!
//! - [`Strategy::Minimax`]: adversaries minimize; ties at every node are broken
//!   uniformly at random among the tying actions
//! - [`Strategy::AlphaBeta`]: minimax with alpha-beta pruning; same root
//!   value as minimax, fewer nodes visited, first-best tie-break
//! - [`Strategy::Expectimax`]: adversaries are chance nodes choosing uniformly
//!
//! Depth counts full turn cycles: it increases by one every time the turn
//! order wraps back to the searching agent. The root's own moves are always
//! expanded, so a search at depth 0 compares the immediate successors.
//!
//! # Usage
//!
//! ```rust
//! use adversarial::{choose_action, Decision, ScoreEvaluator, Strategy};
//! use engine_core::synthetic::{TreeNode, TreeState};
//!
//! // The protagonist picks A or B, then the adversary picks A or B.
//! let state = TreeState::new(
//!     TreeNode::branch(vec![
//!         ("A", TreeNode::branch(vec![("A", TreeNode::leaf(3.0)), ("B", TreeNode::leaf(9.0))])),
//!         ("B", TreeNode::branch(vec![("A", TreeNode::leaf(2.0)), ("B", TreeNode::leaf(8.0))])),
//!     ]),
//!     2,
//! );
//!
//! let decision = choose_action(Strategy::AlphaBeta, &state, 1, &ScoreEvaluator, 0).unwrap();
//! assert_eq!(decision, Decision::Play("A".to_string()));
//! ```
//!
//! # Agents
//!
//! The [`Agent`] trait is the per-turn interface used by game loops.
//! [`SearchAgent`] runs a full search for its own index; [`GhostAgent`] wraps
//! a [`GhostPolicy`], the lookahead an adversary runs for its own objective.
//! [`ReflexAgent`], [`RandomAgent`] and [`DistributionAgent`] do not search.

mod alphabeta;
mod expectimax;
mod minimax;

pub mod agents;
pub mod config;
pub mod evaluator;
pub mod ghost;
pub mod node;
pub mod search;
pub mod strategy;
pub mod turn;

// Re-export main types
pub use agents::{
    sample_distribution, ActionDistribution, Agent, DistributionAgent, GhostAgent, RandomAgent,
    ReflexAgent, SearchAgent,
};
pub use config::SearchConfig;
pub use evaluator::{Evaluator, Negated, ScoreEvaluator};
pub use ghost::GhostPolicy;
pub use node::{Decision, NodeResult};
pub use search::{choose_action, AdversarialSearch, SearchError, SearchResult, SearchStats};
pub use strategy::{ParseStrategyError, Strategy};
pub use turn::{next_turn, Turn, TurnSequencer};
