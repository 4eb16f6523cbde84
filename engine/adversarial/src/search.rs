//! Search entry points and the state shared by every strategy.
//!
//! A search is a plain depth-first recursion. Each call carries its own
//! `(agent, depth, ply)` (and `(alpha, beta)` for alpha-beta) as arguments;
//! the only thing threaded through by reference is the bookkeeping in
//! [`Searcher`]: the tie-breaking RNG and the visit counters.

use std::time::Instant;

use engine_core::{AgentIndex, GameState, StateError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::SearchConfig;
use crate::evaluator::Evaluator;
use crate::node::{Decision, NodeResult};
use crate::strategy::Strategy;
use crate::turn::TurnSequencer;

/// Errors that can occur during search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Cannot search a state with no agents")]
    NoAgents,

    #[error("Agent index {agent} out of range for a state with {num_agents} agents")]
    AgentOutOfRange { agent: AgentIndex, num_agents: usize },

    #[error("Agent {0} is not an adversary (adversaries have index >= 1)")]
    NotAnAdversary(AgentIndex),

    #[error("Precondition violated: {0}")]
    State(#[from] StateError),
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes_visited: u64,
    /// Calls to the evaluator
    pub leaves_evaluated: u64,
    /// Non-terminal nodes evaluated because the depth bound was reached
    pub cutoffs: u64,
    /// Times alpha-beta stopped exploring a node's remaining actions
    pub prunes: u64,
    /// Deepest ply reached (root = 0)
    pub max_ply: u32,
    /// Wall-clock time of the search (microseconds)
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Accumulate counters from another search.
    pub fn add(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.leaves_evaluated += other.leaves_evaluated;
        self.cutoffs += other.cutoffs;
        self.prunes += other.prunes;
        self.max_ply = self.max_ply.max(other.max_ply);
        self.elapsed_us += other.elapsed_us;
    }
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Action for the searching agent
    pub decision: Decision<A>,

    /// Value of the root for the searching agent
    pub value: f64,

    /// Work performed
    pub stats: SearchStats,
}

/// Outcome of the checks every strategy runs on entering a node.
pub(crate) enum Expansion<A> {
    /// Stop here with this evaluation.
    Leaf(f64),
    /// Expand these actions.
    Actions(Vec<A>),
}

/// Bookkeeping shared by the recursive strategy implementations.
///
/// The strategies themselves live in `minimax.rs`, `alphabeta.rs` and
/// `expectimax.rs` as further `impl` blocks on this type.
pub(crate) struct Searcher<'a, E> {
    pub(crate) evaluator: &'a E,
    pub(crate) max_depth: u32,
    /// Agent whose value is maximized
    pub(crate) maximizer: AgentIndex,
    pub(crate) turns: TurnSequencer,
    pub(crate) rng: &'a mut ChaCha20Rng,
    pub(crate) stats: SearchStats,
}

impl<'a, E> Searcher<'a, E> {
    pub(crate) fn new(
        evaluator: &'a E,
        max_depth: u32,
        maximizer: AgentIndex,
        rng: &'a mut ChaCha20Rng,
    ) -> Self {
        Self {
            evaluator,
            max_depth,
            maximizer,
            turns: TurnSequencer::anchored(maximizer),
            rng,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn is_maximizer(&self, agent: AgentIndex) -> bool {
        agent == self.maximizer
    }

    /// Enter a node: count it, then either evaluate it or list its actions.
    ///
    /// A node is evaluated when it is terminal, when the depth bound is
    /// reached, or when `agent` has no legal action. The root is exempt from
    /// the depth bound so that a search always compares the searching agent's
    /// own moves.
    pub(crate) fn enter<S>(
        &mut self,
        agent: AgentIndex,
        depth: u32,
        ply: u32,
        state: &S,
    ) -> Expansion<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if state.outcome().is_terminal() {
            return Expansion::Leaf(self.evaluate(state));
        }
        if ply > 0 && depth >= self.max_depth {
            self.stats.cutoffs += 1;
            return Expansion::Leaf(self.evaluate(state));
        }

        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            return Expansion::Leaf(self.evaluate(state));
        }
        Expansion::Actions(actions)
    }

    pub(crate) fn evaluate<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.leaves_evaluated += 1;
        self.evaluator.evaluate(state)
    }

    /// Run `strategy` from the root, where `self.maximizer` moves first.
    pub(crate) fn search_root<S>(
        &mut self,
        strategy: Strategy,
        state: &S,
    ) -> Result<NodeResult<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let root = self.maximizer;
        match strategy {
            Strategy::Minimax => self.minimax(root, 0, 0, state),
            Strategy::AlphaBeta => {
                self.alpha_beta(root, 0, 0, state, f64::NEG_INFINITY, f64::INFINITY)
            }
            Strategy::Expectimax => self.expectimax(root, 0, 0, state),
        }
    }
}

/// Validate the root and run one search for `searching_agent`.
pub(crate) fn run_search<S, E>(
    evaluator: &E,
    config: &SearchConfig,
    rng: &mut ChaCha20Rng,
    state: &S,
    searching_agent: AgentIndex,
) -> Result<SearchResult<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let num_agents = state.num_agents();
    if num_agents == 0 {
        return Err(SearchError::NoAgents);
    }
    if searching_agent >= num_agents {
        return Err(SearchError::AgentOutOfRange {
            agent: searching_agent,
            num_agents,
        });
    }

    let start = Instant::now();
    let mut searcher = Searcher::new(evaluator, config.max_depth, searching_agent, rng);
    let root = searcher.search_root(config.strategy, state)?;

    let mut stats = searcher.stats;
    stats.elapsed_us = start.elapsed().as_micros() as u64;

    debug!(
        strategy = %config.strategy,
        agent = searching_agent,
        max_depth = config.max_depth,
        value = root.value,
        nodes = stats.nodes_visited,
        leaves = stats.leaves_evaluated,
        cutoffs = stats.cutoffs,
        prunes = stats.prunes,
        elapsed_us = stats.elapsed_us,
        "Search complete"
    );

    Ok(SearchResult {
        decision: Decision::from(root.action),
        value: root.value,
        stats,
    })
}

pub(crate) fn make_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}

/// Search state: an evaluator, a configuration and the tie-breaking RNG.
///
/// Nothing is cached between runs; every call to [`AdversarialSearch::run`]
/// explores the tree from scratch.
pub struct AdversarialSearch<'a, E> {
    evaluator: &'a E,
    config: SearchConfig,
    rng: ChaCha20Rng,
}

impl<'a, E> AdversarialSearch<'a, E> {
    pub fn new(evaluator: &'a E, config: SearchConfig) -> Self {
        let rng = make_rng(config.seed);
        Self {
            evaluator,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `state` on behalf of `searching_agent`.
    ///
    /// The searching agent maximizes the evaluator; every other agent is an
    /// adversary (minimizing, or a uniform chance node under expectimax).
    pub fn run<S>(
        &mut self,
        state: &S,
        searching_agent: AgentIndex,
    ) -> Result<SearchResult<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        run_search(
            self.evaluator,
            &self.config,
            &mut self.rng,
            state,
            searching_agent,
        )
    }
}

/// Convenience function to pick one action with a fresh search.
pub fn choose_action<S, E>(
    strategy: Strategy,
    state: &S,
    max_depth: u32,
    evaluator: &E,
    searching_agent: AgentIndex,
) -> Result<Decision<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let config = SearchConfig::new(strategy, max_depth);
    let mut search = AdversarialSearch::new(evaluator, config);
    Ok(search.run(state, searching_agent)?.decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::ScoreEvaluator;
    use engine_core::synthetic::{TreeNode, TreeState};
    use engine_core::Outcome;

    fn fixture() -> TreeState {
        TreeState::new(
            TreeNode::branch(vec![
                (
                    "A",
                    TreeNode::branch(vec![("A", TreeNode::leaf(3.0)), ("B", TreeNode::leaf(9.0))]),
                ),
                (
                    "B",
                    TreeNode::branch(vec![("A", TreeNode::leaf(2.0)), ("B", TreeNode::leaf(8.0))]),
                ),
            ]),
            2,
        )
    }

    #[test]
    fn test_zero_agents_rejected() {
        let state = TreeState::new(TreeNode::leaf(0.0), 0);
        let err = choose_action(Strategy::Minimax, &state, 2, &ScoreEvaluator, 0).unwrap_err();
        assert_eq!(err, SearchError::NoAgents);
    }

    #[test]
    fn test_searching_agent_out_of_range() {
        let err = choose_action(Strategy::AlphaBeta, &fixture(), 2, &ScoreEvaluator, 5).unwrap_err();
        assert_eq!(
            err,
            SearchError::AgentOutOfRange {
                agent: 5,
                num_agents: 2
            }
        );
    }

    #[test]
    fn test_all_strategies_agree_on_fixture_action() {
        for strategy in Strategy::ALL {
            let decision = choose_action(strategy, &fixture(), 1, &ScoreEvaluator, 0).unwrap();
            assert_eq!(decision, Decision::Play("A".to_string()), "{}", strategy);
        }
    }

    #[test]
    fn test_terminal_root_is_noop() {
        let state = TreeState::new(TreeNode::terminal(Outcome::Lose, -10.0), 2);
        for strategy in Strategy::ALL {
            let mut search =
                AdversarialSearch::new(&ScoreEvaluator, SearchConfig::new(strategy, 3));
            let result = search.run(&state, 0).unwrap();
            assert!(result.decision.is_noop());
            assert_eq!(result.value, -10.0);
            assert_eq!(result.stats.leaves_evaluated, 1);
        }
    }

    #[test]
    fn test_stats_count_root_and_leaves() {
        let mut search = AdversarialSearch::new(
            &ScoreEvaluator,
            SearchConfig::new(Strategy::Minimax, 1).with_seed(1),
        );
        let result = search.run(&fixture(), 0).unwrap();
        // root + 2 min nodes + 4 leaves
        assert_eq!(result.stats.nodes_visited, 7);
        assert_eq!(result.stats.leaves_evaluated, 4);
        assert_eq!(result.stats.max_ply, 2);
        assert_eq!(result.stats.prunes, 0);
    }

    #[test]
    fn test_stats_add() {
        let mut total = SearchStats::default();
        let one = SearchStats {
            nodes_visited: 7,
            leaves_evaluated: 4,
            cutoffs: 0,
            prunes: 1,
            max_ply: 2,
            elapsed_us: 10,
        };
        total.add(&one);
        total.add(&one);
        assert_eq!(total.nodes_visited, 14);
        assert_eq!(total.prunes, 2);
        assert_eq!(total.max_ply, 2);
        assert_eq!(total.elapsed_us, 20);
    }

    #[test]
    fn test_seeded_searches_repeat() {
        let config = SearchConfig::new(Strategy::Minimax, 1).with_seed(9);
        let tied = TreeState::new(
            TreeNode::branch(vec![
                ("x", TreeNode::leaf(1.0)),
                ("y", TreeNode::leaf(1.0)),
                ("z", TreeNode::leaf(1.0)),
            ]),
            1,
        );
        let first: Vec<_> = {
            let mut search = AdversarialSearch::new(&ScoreEvaluator, config.clone());
            (0..10).map(|_| search.run(&tied, 0).unwrap().decision).collect()
        };
        let second: Vec<_> = {
            let mut search = AdversarialSearch::new(&ScoreEvaluator, config);
            (0..10).map(|_| search.run(&tied, 0).unwrap().decision).collect()
        };
        assert_eq!(first, second);
    }
}
