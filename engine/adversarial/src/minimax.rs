//! Plain minimax with randomized tie-breaking.

use engine_core::{AgentIndex, GameState};
use rand::seq::SliceRandom;

use crate::evaluator::Evaluator;
use crate::node::NodeResult;
use crate::search::{Expansion, SearchError, Searcher};

impl<E> Searcher<'_, E> {
    /// Minimax value of `state` with `agent` to move.
    ///
    /// The maximizer keeps every action reaching the greatest value, each
    /// adversary every action reaching the least, and the returned action is
    /// drawn uniformly from that set.
    pub(crate) fn minimax<S>(
        &mut self,
        agent: AgentIndex,
        depth: u32,
        ply: u32,
        state: &S,
    ) -> Result<NodeResult<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let actions = match self.enter(agent, depth, ply, state) {
            Expansion::Leaf(value) => return Ok(NodeResult::leaf(value)),
            Expansion::Actions(actions) => actions,
        };

        let maximizing = self.is_maximizer(agent);
        let turn = self.turns.next(agent, state.num_agents());

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut tied: Vec<S::Action> = Vec::new();

        for action in actions {
            let child = state.successor(agent, &action)?;
            let value = self
                .minimax(turn.agent, depth + turn.depth_increment, ply + 1, &child)?
                .value;

            let better = if maximizing { value > best } else { value < best };
            if better || tied.is_empty() {
                best = value;
                tied.clear();
                tied.push(action);
            } else if value == best {
                tied.push(action);
            }
        }

        let action = tied.choose(&mut *self.rng).cloned();
        Ok(NodeResult::new(best, action))
    }
}
