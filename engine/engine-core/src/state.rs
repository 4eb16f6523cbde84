//! Game state capability contract.
//!
//! The search engine never inspects a game directly. It only asks a state for
//! the handful of capabilities listed on [`GameState`], and every transition
//! produces a fresh value, so a search holds nothing but the chain of states
//! leading from the root to the node it is currently expanding.

use std::fmt::Debug;

use crate::error::StateError;

/// Index of an agent within a state's turn order.
///
/// Index 0 is the protagonist (the maximizing agent); every index `>= 1` is an
/// adversary. Valid indices are `0..state.num_agents()`.
pub type AgentIndex = usize;

/// Index of the protagonist agent.
pub const PROTAGONIST: AgentIndex = 0;

/// Terminal status of a state from the protagonist's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The protagonist has won.
    Win,
    /// The protagonist has lost.
    Lose,
    /// Play continues (this includes states where nobody can move).
    Ongoing,
}

impl Outcome {
    /// Whether the game has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Main trait for turn-based multi-agent games.
///
/// Implementations must be immutable from the engine's point of view:
/// [`GameState::successor`] returns a new state and leaves the receiver
/// untouched. The number of agents must not change while a search is running.
///
/// # Example
///
/// ```rust
/// use engine_core::{AgentIndex, GameState, Outcome, StateError};
///
/// /// A counter that two agents take turns incrementing.
/// #[derive(Debug, Clone)]
/// struct Counter {
///     value: i32,
///     turn: AgentIndex,
/// }
///
/// impl GameState for Counter {
///     type Action = i32;
///
///     fn num_agents(&self) -> usize {
///         2
///     }
///
///     fn legal_actions(&self, agent: AgentIndex) -> Vec<i32> {
///         if agent == self.turn && self.value.abs() < 3 {
///             vec![-1, 1]
///         } else {
///             Vec::new()
///         }
///     }
///
///     fn successor(&self, agent: AgentIndex, action: &i32) -> Result<Self, StateError> {
///         if !self.legal_actions(agent).contains(action) {
///             return Err(StateError::illegal(agent, action));
///         }
///         Ok(Counter {
///             value: self.value + action,
///             turn: (agent + 1) % 2,
///         })
///     }
///
///     fn outcome(&self) -> Outcome {
///         match self.value {
///             3 => Outcome::Win,
///             -3 => Outcome::Lose,
///             _ => Outcome::Ongoing,
///         }
///     }
///
///     fn score(&self) -> f64 {
///         self.value as f64
///     }
/// }
///
/// let start = Counter { value: 0, turn: 0 };
/// let next = start.successor(0, &1).unwrap();
/// assert_eq!(next.value, 1);
/// assert_eq!(start.value, 0);
/// ```
pub trait GameState: Clone + Debug {
    /// Action type - should be small and cheap to clone
    type Action: Clone + PartialEq + Debug;

    /// Total number of agents taking turns in this state.
    fn num_agents(&self) -> usize;

    /// Legal actions for `agent` in this state.
    ///
    /// An empty list means the agent cannot move; the engine treats such a
    /// node as an evaluable dead end.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// State reached when `agent` plays `action`.
    ///
    /// Playing an action that is absent from `legal_actions(agent)` is a
    /// caller contract violation and must be reported as
    /// [`StateError::IllegalAction`].
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Result<Self, StateError>;

    /// Terminal status of the state.
    fn outcome(&self) -> Outcome;

    /// Raw game score, higher is better for the protagonist.
    ///
    /// Must be defined for every reachable state, terminal or not.
    fn score(&self) -> f64;

    /// Check that `agent` is a valid index for this state.
    fn check_agent(&self, agent: AgentIndex) -> Result<(), StateError> {
        let num_agents = self.num_agents();
        if agent >= num_agents {
            return Err(StateError::AgentOutOfRange { agent, num_agents });
        }
        Ok(())
    }
}
