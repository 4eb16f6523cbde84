//! Agents that pick one action per turn.
//!
//! [`SearchAgent`] and [`GhostPolicy`] look ahead; the rest choose from a
//! one-step score or a fixed probability distribution.

use engine_core::{AgentIndex, GameState};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::config::SearchConfig;
use crate::evaluator::Evaluator;
use crate::ghost::GhostPolicy;
use crate::node::Decision;
use crate::search::{make_rng, run_search, SearchError, SearchStats};

/// An agent taking part in a game.
pub trait Agent<S: GameState> {
    /// Index of the agent within the turn order.
    fn index(&self) -> AgentIndex;

    /// Pick an action for this agent in `state`.
    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError>;

    /// Work done by the most recent `get_action`, for agents that search.
    fn last_stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Agent that runs a full search for its own index on every turn.
pub struct SearchAgent<E> {
    index: AgentIndex,
    evaluator: E,
    config: SearchConfig,
    rng: ChaCha20Rng,
    last_stats: Option<SearchStats>,
}

impl<E> SearchAgent<E> {
    pub fn new(index: AgentIndex, evaluator: E, config: SearchConfig) -> Self {
        let rng = make_rng(config.seed);
        Self {
            index,
            evaluator,
            config,
            rng,
            last_stats: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<S, E> Agent<S> for SearchAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let result = run_search(&self.evaluator, &self.config, &mut self.rng, state, self.index)?;
        self.last_stats = Some(result.stats);
        Ok(result.decision)
    }

    fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

/// Wraps a [`GhostPolicy`] and remembers the stats of its last search.
pub struct GhostAgent<E> {
    policy: GhostPolicy<E>,
    last_stats: Option<SearchStats>,
}

impl<E> GhostAgent<E> {
    pub fn new(policy: GhostPolicy<E>) -> Self {
        Self {
            policy,
            last_stats: None,
        }
    }
}

impl<S, E> Agent<S> for GhostAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn index(&self) -> AgentIndex {
        self.policy.index()
    }

    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let result = self.policy.search(state)?;
        self.last_stats = Some(result.stats);
        Ok(result.decision)
    }

    fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

/// Scores each legal action by evaluating its successor once and picks
/// uniformly among the best.
pub struct ReflexAgent<E> {
    index: AgentIndex,
    evaluator: E,
    rng: ChaCha20Rng,
}

impl<E> ReflexAgent<E> {
    pub fn new(index: AgentIndex, evaluator: E, seed: Option<u64>) -> Self {
        Self {
            index,
            evaluator,
            rng: make_rng(seed),
        }
    }
}

impl<S, E> Agent<S> for ReflexAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        state.check_agent(self.index)?;

        let mut best = f64::NEG_INFINITY;
        let mut tied = Vec::new();
        for action in state.legal_actions(self.index) {
            let score = self
                .evaluator
                .evaluate(&state.successor(self.index, &action)?);
            if score > best || tied.is_empty() {
                best = score;
                tied.clear();
                tied.push(action);
            } else if score == best {
                tied.push(action);
            }
        }

        Ok(Decision::from(tied.choose(&mut self.rng).cloned()))
    }
}

/// Picks a legal action uniformly at random.
pub struct RandomAgent {
    index: AgentIndex,
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(index: AgentIndex, seed: Option<u64>) -> Self {
        Self {
            index,
            rng: make_rng(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        state.check_agent(self.index)?;
        let actions = state.legal_actions(self.index);
        Ok(Decision::from(actions.choose(&mut self.rng).cloned()))
    }
}

/// A fixed rule mapping a state to a distribution over an agent's actions.
///
/// Weights need not be normalized. An empty distribution means the agent
/// does nothing this turn.
pub trait ActionDistribution<S: GameState> {
    fn distribution(&self, state: &S, agent: AgentIndex) -> Vec<(S::Action, f64)>;
}

/// Draw one action from `(action, weight)` pairs.
///
/// Returns `None` when the distribution is empty or carries no positive
/// weight.
pub fn sample_distribution<A: Clone, R: Rng + ?Sized>(
    distribution: &[(A, f64)],
    rng: &mut R,
) -> Option<A> {
    let weights = WeightedIndex::<f64>::new(distribution.iter().map(|(_, weight)| *weight)).ok()?;
    Some(distribution[weights.sample(rng)].0.clone())
}

/// Agent that samples its action from an [`ActionDistribution`].
pub struct DistributionAgent<P> {
    index: AgentIndex,
    policy: P,
    rng: ChaCha20Rng,
}

impl<P> DistributionAgent<P> {
    pub fn new(index: AgentIndex, policy: P, seed: Option<u64>) -> Self {
        Self {
            index,
            policy,
            rng: make_rng(seed),
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<S, P> Agent<S> for DistributionAgent<P>
where
    S: GameState,
    P: ActionDistribution<S>,
{
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn get_action(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        state.check_agent(self.index)?;
        let distribution = self.policy.distribution(state, self.index);
        Ok(Decision::from(sample_distribution(&distribution, &mut self.rng)))
    }
}
