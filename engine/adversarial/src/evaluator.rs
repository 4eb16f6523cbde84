//! Evaluator trait for leaf evaluation.
//!
//! The evaluator scores states where the search stops: terminal states,
//! states at the depth bound and states where the mover has no legal action.
//! Higher values are better for the agent the search is run for.

use engine_core::GameState;

/// Trait for leaf evaluators.
///
/// Any `Fn(&S) -> f64` closure is an evaluator, so heuristics can be passed
/// inline or boxed as `Box<dyn Fn(&S) -> f64>` when chosen at runtime.
pub trait Evaluator<S: GameState> {
    /// Score a state. Must be defined for every reachable state.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Evaluator that returns the game's own score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl ScoreEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Evaluator that negates another, turning a protagonist score into an
/// adversary's objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negated<E>(pub E);

impl<S: GameState, E: Evaluator<S>> Evaluator<S> for Negated<E> {
    fn evaluate(&self, state: &S) -> f64 {
        -self.0.evaluate(state)
    }
}
