//! Fixed action distributions for chasers.

use adversarial::ActionDistribution;
use engine_core::{AgentIndex, GameState};

use crate::state::{Direction, PursuitState};

/// Default probability mass on moves that close in on the runner.
pub const DEFAULT_PROB_ATTACK: f64 = 0.8;

/// Uniform over the chaser's legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChaser;

impl ActionDistribution<PursuitState> for RandomChaser {
    fn distribution(&self, state: &PursuitState, agent: AgentIndex) -> Vec<(Direction, f64)> {
        let actions = state.legal_actions(agent);
        let prob = 1.0 / actions.len() as f64;
        actions.into_iter().map(|action| (action, prob)).collect()
    }
}

/// Prefers moves that minimize Manhattan distance to the runner.
///
/// `prob_attack` is split evenly over the best moves and the remaining
/// `1 - prob_attack` evenly over all legal moves.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalChaser {
    prob_attack: f64,
}

impl Default for DirectionalChaser {
    fn default() -> Self {
        Self {
            prob_attack: DEFAULT_PROB_ATTACK,
        }
    }
}

impl DirectionalChaser {
    /// `prob_attack` is clamped to `[0, 1]`.
    pub fn new(prob_attack: f64) -> Self {
        Self {
            prob_attack: prob_attack.clamp(0.0, 1.0),
        }
    }

    pub fn prob_attack(&self) -> f64 {
        self.prob_attack
    }
}

impl ActionDistribution<PursuitState> for DirectionalChaser {
    fn distribution(&self, state: &PursuitState, agent: AgentIndex) -> Vec<(Direction, f64)> {
        let actions = state.legal_actions(agent);
        let Some(pos) = state.position(agent) else {
            return Vec::new();
        };
        if actions.is_empty() {
            return Vec::new();
        }

        let runner = state.runner();
        let distances: Vec<Option<usize>> = actions
            .iter()
            .map(|action| action.apply(pos).map(|next| next.manhattan(&runner)))
            .collect();
        let best = distances.iter().flatten().min().copied();
        let num_best = distances.iter().filter(|d| **d == best).count();

        let share = (1.0 - self.prob_attack) / actions.len() as f64;
        actions
            .into_iter()
            .zip(distances)
            .map(|(action, distance)| {
                let mut prob = share;
                if distance == best {
                    prob += self.prob_attack / num_best as f64;
                }
                (action, prob)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn prob_of(distribution: &[(Direction, f64)], direction: Direction) -> f64 {
        distribution
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_random_chaser_is_uniform() {
        let state = PursuitState::new(&Layout::builtin("corridor").unwrap());
        let distribution = RandomChaser.distribution(&state, 1);
        assert_eq!(distribution.len(), 2);
        assert!(distribution.iter().all(|(_, p)| (*p - 0.5).abs() < 1e-9));
    }

    #[test]
    fn test_directional_chaser_prefers_runner() {
        // chaser at (5, 1): West closes in, South does not
        let state = PursuitState::new(&Layout::builtin("corridor").unwrap());
        let distribution = DirectionalChaser::default().distribution(&state, 1);

        let total: f64 = distribution.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((prob_of(&distribution, Direction::West) - 0.9).abs() < 1e-9);
        assert!((prob_of(&distribution, Direction::South) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_ties_share_attack_mass() {
        // chaser at (3, 2), runner at (1, 1): North and West both reach distance 2
        let layout = Layout::parse(
            "%%%%%\n\
             %P..%\n\
             %..G%\n\
             %%%%%",
        )
        .unwrap();
        let state = PursuitState::new(&layout);
        let distribution = DirectionalChaser::new(1.0).distribution(&state, 1);
        assert!((prob_of(&distribution, Direction::North) - 0.5).abs() < 1e-9);
        assert!((prob_of(&distribution, Direction::West) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_prob_attack_is_clamped() {
        assert_eq!(DirectionalChaser::new(3.0).prob_attack(), 1.0);
        assert_eq!(DirectionalChaser::new(-1.0).prob_attack(), 0.0);
    }

    #[test]
    fn test_finished_game_has_empty_distribution() {
        let layout = Layout::parse("%%%%%\n%PG.%\n%%%%%").unwrap();
        let state = PursuitState::new(&layout)
            .successor(0, &Direction::East)
            .unwrap();
        assert!(state.outcome().is_terminal());
        assert!(DirectionalChaser::default().distribution(&state, 1).is_empty());
        assert!(RandomChaser.distribution(&state, 1).is_empty());
    }
}
