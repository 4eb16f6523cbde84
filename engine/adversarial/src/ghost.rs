//! Lookahead policy for an adversary choosing its own move.
//!
//! The adversary plays the maximizing role for its own objective while every
//! other agent, the protagonist included, minimizes it. Depth counts full
//! turn cycles starting and ending at the adversary.

use engine_core::{AgentIndex, GameState, PROTAGONIST};
use rand_chacha::ChaCha20Rng;

use crate::config::SearchConfig;
use crate::evaluator::Evaluator;
use crate::search::{make_rng, run_search, SearchError, SearchResult};
use crate::strategy::Strategy;

/// Depth-limited minimax run on behalf of adversary `index`.
///
/// The evaluator scores states from the adversary's point of view.
pub struct GhostPolicy<E> {
    index: AgentIndex,
    depth: u32,
    evaluator: E,
    rng: ChaCha20Rng,
}

impl<E> GhostPolicy<E> {
    /// Create a policy for adversary `index` (must be `>= 1`).
    pub fn new(index: AgentIndex, depth: u32, evaluator: E) -> Result<Self, SearchError> {
        Self::build(index, depth, evaluator, None)
    }

    /// Same as [`GhostPolicy::new`] with a fixed tie-breaking seed.
    pub fn with_seed(
        index: AgentIndex,
        depth: u32,
        evaluator: E,
        seed: u64,
    ) -> Result<Self, SearchError> {
        Self::build(index, depth, evaluator, Some(seed))
    }

    fn build(
        index: AgentIndex,
        depth: u32,
        evaluator: E,
        seed: Option<u64>,
    ) -> Result<Self, SearchError> {
        if index == PROTAGONIST {
            return Err(SearchError::NotAnAdversary(index));
        }
        Ok(Self {
            index,
            depth,
            evaluator,
            rng: make_rng(seed),
        })
    }

    pub fn index(&self) -> AgentIndex {
        self.index
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search `state` for the adversary's move.
    pub fn search<S>(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let config = SearchConfig::new(Strategy::Minimax, self.depth);
        run_search(&self.evaluator, &config, &mut self.rng, state, self.index)
    }
}
