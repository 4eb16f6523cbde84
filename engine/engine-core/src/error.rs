//! Errors raised by game states.

use std::fmt::Debug;

use crate::state::AgentIndex;

/// Precondition violations reported by a [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Agent {agent} cannot play {action}: not a legal action")]
    IllegalAction { agent: AgentIndex, action: String },

    #[error("Agent index {agent} out of range for a state with {num_agents} agents")]
    AgentOutOfRange { agent: AgentIndex, num_agents: usize },
}

impl StateError {
    /// Build an [`StateError::IllegalAction`] from any debuggable action.
    pub fn illegal<A: Debug>(agent: AgentIndex, action: &A) -> Self {
        StateError::IllegalAction {
            agent,
            action: format!("{:?}", action),
        }
    }
}
