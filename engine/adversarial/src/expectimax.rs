//! Expectimax: adversaries are uniform chance nodes.

use engine_core::{AgentIndex, GameState};

use crate::evaluator::Evaluator;
use crate::node::NodeResult;
use crate::search::{Expansion, SearchError, Searcher};

impl<E> Searcher<'_, E> {
    /// The maximizer takes the first action reaching the greatest value.
    /// Every other agent averages over all of its actions with weight
    /// `1 / |actions|` and returns no action.
    pub(crate) fn expectimax<S>(
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

        let turn = self.turns.next(agent, state.num_agents());
        let next_depth = depth + turn.depth_increment;

        if !self.is_maximizer(agent) {
            let prob = 1.0 / actions.len() as f64;
            let mut expected = 0.0;
            for action in &actions {
                let child = state.successor(agent, action)?;
                expected += prob * self.expectimax(turn.agent, next_depth, ply + 1, &child)?.value;
            }
            return Ok(NodeResult::leaf(expected));
        }

        let mut best = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in actions {
            let child = state.successor(agent, &action)?;
            let value = self
                .expectimax(turn.agent, next_depth, ply + 1, &child)?
                .value;
            if value > best || best_action.is_none() {
                best = value;
                best_action = Some(action);
            }
        }

        Ok(NodeResult::new(best, best_action))
    }
}
