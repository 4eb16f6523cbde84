//! Minimax with alpha-beta pruning.
//!
//! A node stops exploring its remaining actions as soon as its best value
//! falls strictly outside the `(alpha, beta)` window it was called with.
//! Equality with a bound does not prune. The bounds are passed by value, so
//! narrowing them in one node never affects a sibling.
//!
//! Ties go to the first action reaching the best value, which keeps the
//! result independent of the tie-breaking RNG.

use engine_core::{AgentIndex, GameState};
use tracing::trace;

use crate::evaluator::Evaluator;
use crate::node::NodeResult;
use crate::search::{Expansion, SearchError, Searcher};

impl<E> Searcher<'_, E> {
    pub(crate) fn alpha_beta<S>(
        &mut self,
        agent: AgentIndex,
        depth: u32,
        ply: u32,
        state: &S,
        mut alpha: f64,
        mut beta: f64,
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
        let total = actions.len();

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_action: Option<S::Action> = None;

        for (i, action) in actions.into_iter().enumerate() {
            let child = state.successor(agent, &action)?;
            let value = self
                .alpha_beta(
                    turn.agent,
                    depth + turn.depth_increment,
                    ply + 1,
                    &child,
                    alpha,
                    beta,
                )?
                .value;

            if maximizing {
                if value > best || best_action.is_none() {
                    best = value;
                    best_action = Some(action);
                }
                if best > beta {
                    self.prune(agent, ply, best, total - i - 1);
                    break;
                }
                alpha = alpha.max(best);
            } else {
                if value < best || best_action.is_none() {
                    best = value;
                    best_action = Some(action);
                }
                if best < alpha {
                    self.prune(agent, ply, best, total - i - 1);
                    break;
                }
                beta = beta.min(best);
            }
        }

        Ok(NodeResult::new(best, best_action))
    }

    fn prune(&mut self, agent: AgentIndex, ply: u32, value: f64, skipped: usize) {
        self.stats.prunes += 1;
        trace!(agent, ply, value, skipped, "Pruned remaining actions");
    }
}
