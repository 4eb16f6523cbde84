//! Turn order and depth accounting.

use engine_core::{AgentIndex, PROTAGONIST};

/// Next agent to move and whether moving to it completes a full cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub agent: AgentIndex,
    pub depth_increment: u32,
}

/// Cyclic turn order over `0..num_agents`.
///
/// Depth advances by one each time the order wraps back to the anchor agent,
/// i.e. once per full cycle. The anchor is the agent the search is run for:
/// the protagonist by default, or an adversary searching on its own behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSequencer {
    anchor: AgentIndex,
}

impl Default for TurnSequencer {
    fn default() -> Self {
        Self {
            anchor: PROTAGONIST,
        }
    }
}

impl TurnSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequencer whose cycles start and end at `anchor`.
    pub fn anchored(anchor: AgentIndex) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> AgentIndex {
        self.anchor
    }

    /// Agent after `agent`, and 1 if that agent is the anchor.
    ///
    /// `num_agents` must be at least 1.
    pub fn next(&self, agent: AgentIndex, num_agents: usize) -> Turn {
        let next = (agent + 1) % num_agents;
        Turn {
            agent: next,
            depth_increment: u32::from(next == self.anchor),
        }
    }
}

/// Protagonist-anchored turn step: `((agent + 1) % num_agents, wrapped)`.
pub fn next_turn(agent: AgentIndex, num_agents: usize) -> Turn {
    TurnSequencer::default().next(agent, num_agents)
}
