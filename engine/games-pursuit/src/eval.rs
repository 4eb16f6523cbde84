//! Heuristic evaluators for depth-limited search on pursuit boards.

use engine_core::{GameState, Outcome};

use crate::state::PursuitState;

/// Value a chaser assigns to a decided game.
pub const CAPTURE_VALUE: f64 = 1000.0;

/// Penalty applied when a chaser is one step from the runner.
const DANGER_PENALTY: f64 = 200.0;

/// Runner heuristic: game score, pulled towards the closest pellet and away
/// from chasers that are within one step.
///
/// Decided games are scored by the game score alone.
pub fn pellet_distance_evaluation(state: &PursuitState) -> f64 {
    let score = state.score();
    if state.outcome().is_terminal() {
        return score;
    }

    let pellet = state.closest_pellet_distance().unwrap_or(0) as f64;
    let danger = match state.closest_chaser_distance() {
        Some(distance) if distance <= 1 => DANGER_PENALTY,
        _ => 0.0,
    };
    score - pellet - danger
}

/// Chaser objective: large when the runner is caught, very negative when it
/// clears the board, otherwise the negated distance to the closest chaser.
pub fn chaser_evaluation(state: &PursuitState) -> f64 {
    match state.outcome() {
        Outcome::Lose => CAPTURE_VALUE,
        Outcome::Win => -CAPTURE_VALUE,
        Outcome::Ongoing => -(state.closest_chaser_distance().unwrap_or(0) as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::state::Direction;

    #[test]
    fn test_pellet_distance_evaluation() {
        let state = PursuitState::new(&Layout::builtin("corridor").unwrap());
        // score 0, closest pellet 1 step away, chaser 4 steps away
        assert_eq!(pellet_distance_evaluation(&state), -1.0);

        let next = state.successor(0, &Direction::East).unwrap();
        assert_eq!(pellet_distance_evaluation(&next), next.score() - 1.0);
    }

    #[test]
    fn test_nearby_chaser_is_penalized() {
        let state = PursuitState::new(&Layout::builtin("tiny").unwrap());
        let state = state.successor(0, &Direction::East).unwrap();
        let far = pellet_distance_evaluation(&state);
        let state = state.successor(1, &Direction::West).unwrap();
        assert_eq!(state.closest_chaser_distance(), Some(1));
        assert_eq!(pellet_distance_evaluation(&state), far - DANGER_PENALTY);
    }

    #[test]
    fn test_chaser_evaluation() {
        let state = PursuitState::new(&Layout::builtin("tiny").unwrap());
        assert_eq!(chaser_evaluation(&state), -3.0);

        let state = state.successor(0, &Direction::East).unwrap();
        let state = state.successor(1, &Direction::West).unwrap();
        let caught = state.successor(0, &Direction::Stop).unwrap();
        let caught = caught.successor(1, &Direction::West).unwrap();
        assert_eq!(chaser_evaluation(&caught), CAPTURE_VALUE);

        let won = state.successor(0, &Direction::East).unwrap();
        assert_eq!(chaser_evaluation(&won), -CAPTURE_VALUE);
        assert_eq!(pellet_distance_evaluation(&won), won.score());
    }
}
