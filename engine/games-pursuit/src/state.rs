//! Pursuit game state.

use std::rc::Rc;

use engine_core::{AgentIndex, GameState, Outcome, StateError, PROTAGONIST};

use crate::layout::{Grid, Layout, Pos};

/// Points for eating one pellet.
pub const PELLET_REWARD: f64 = 10.0;
/// Points lost on every runner move (stopping included).
pub const TIME_PENALTY: f64 = 1.0;
/// Bonus for clearing the board.
pub const WIN_REWARD: f64 = 500.0;
/// Penalty for being caught.
pub const CAUGHT_PENALTY: f64 = 500.0;

/// A move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Moving directions in the order legal actions are listed.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Cell reached from `pos`, or `None` when stepping off the top or left edge.
    pub fn apply(&self, pos: Pos) -> Option<Pos> {
        match self {
            Direction::North => pos.y.checked_sub(1).map(|y| Pos::new(pos.x, y)),
            Direction::South => Some(Pos::new(pos.x, pos.y + 1)),
            Direction::East => Some(Pos::new(pos.x + 1, pos.y)),
            Direction::West => pos.x.checked_sub(1).map(|x| Pos::new(x, pos.y)),
            Direction::Stop => Some(pos),
        }
    }
}

/// One runner (agent 0) collecting pellets while chasers (agents 1..) try to
/// catch it.
///
/// The runner may stop; chasers must keep moving. The game is won when the
/// last pellet is eaten and lost when a chaser shares the runner's cell.
#[derive(Debug, Clone)]
pub struct PursuitState {
    grid: Rc<Grid>,
    runner: Pos,
    chasers: Vec<Pos>,
    pellets: Vec<Pos>,
    score: f64,
    outcome: Outcome,
}

impl PursuitState {
    pub fn new(layout: &Layout) -> Self {
        let mut state = Self {
            grid: Rc::new(layout.grid.clone()),
            runner: layout.runner,
            chasers: layout.chasers.clone(),
            pellets: layout.pellets.clone(),
            score: 0.0,
            outcome: Outcome::Ongoing,
        };
        state.pellets.sort();
        state.check_caught();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn runner(&self) -> Pos {
        self.runner
    }

    pub fn chasers(&self) -> &[Pos] {
        &self.chasers
    }

    /// Position of agent `agent` (0 = runner).
    pub fn position(&self, agent: AgentIndex) -> Option<Pos> {
        match agent {
            PROTAGONIST => Some(self.runner),
            _ => self.chasers.get(agent - 1).copied(),
        }
    }

    pub fn pellets(&self) -> &[Pos] {
        &self.pellets
    }

    pub fn has_pellet(&self, pos: Pos) -> bool {
        self.pellets.binary_search(&pos).is_ok()
    }

    /// Distance from the runner to the closest pellet.
    pub fn closest_pellet_distance(&self) -> Option<usize> {
        self.pellets
            .iter()
            .map(|pellet| pellet.manhattan(&self.runner))
            .min()
    }

    /// Distance from the runner to the closest chaser.
    pub fn closest_chaser_distance(&self) -> Option<usize> {
        self.chasers
            .iter()
            .map(|chaser| chaser.manhattan(&self.runner))
            .min()
    }

    fn can_enter(&self, pos: Option<Pos>) -> bool {
        pos.map_or(false, |pos| !self.grid.is_wall(pos))
    }

    fn check_caught(&mut self) {
        if self.outcome == Outcome::Ongoing && self.chasers.contains(&self.runner) {
            self.score -= CAUGHT_PENALTY;
            self.outcome = Outcome::Lose;
        }
    }
}

impl GameState for PursuitState {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        let Some(pos) = self.position(agent) else {
            return Vec::new();
        };

        let mut actions: Vec<Direction> = Direction::MOVES
            .into_iter()
            .filter(|direction| self.can_enter(direction.apply(pos)))
            .collect();
        if agent == PROTAGONIST {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn successor(&self, agent: AgentIndex, action: &Direction) -> Result<Self, StateError> {
        self.check_agent(agent)?;
        if !self.legal_actions(agent).contains(action) {
            return Err(StateError::illegal(agent, action));
        }
        let target = self
            .position(agent)
            .and_then(|pos| action.apply(pos))
            .ok_or_else(|| StateError::illegal(agent, action))?;

        let mut next = self.clone();
        if agent == PROTAGONIST {
            next.runner = target;
            next.score -= TIME_PENALTY;
            if let Ok(i) = next.pellets.binary_search(&target) {
                next.pellets.remove(i);
                next.score += PELLET_REWARD;
                if next.pellets.is_empty() {
                    next.score += WIN_REWARD;
                    next.outcome = Outcome::Win;
                }
            }
        } else {
            next.chasers[agent - 1] = target;
        }
        next.check_caught();
        Ok(next)
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> PursuitState {
        PursuitState::new(&Layout::builtin("corridor").unwrap())
    }

    #[test]
    fn test_initial_state() {
        let state = corridor();
        assert_eq!(state.num_agents(), 2);
        assert_eq!(state.runner(), Pos::new(1, 1));
        assert_eq!(state.pellets().len(), 10);
        assert_eq!(state.score(), 0.0);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert_eq!(state.closest_chaser_distance(), Some(4));
        assert_eq!(state.closest_pellet_distance(), Some(1));
    }

    #[test]
    fn test_runner_actions_include_stop() {
        let state = corridor();
        assert_eq!(
            state.legal_actions(0),
            vec![Direction::South, Direction::East, Direction::Stop]
        );
    }

    #[test]
    fn test_chasers_cannot_stop() {
        let state = corridor();
        assert_eq!(
            state.legal_actions(1),
            vec![Direction::South, Direction::West]
        );
        assert!(state.legal_actions(2).is_empty());
    }

    #[test]
    fn test_eating_a_pellet() {
        let state = corridor();
        let next = state.successor(0, &Direction::East).unwrap();
        assert_eq!(next.runner(), Pos::new(2, 1));
        assert_eq!(next.pellets().len(), 9);
        assert_eq!(next.score(), PELLET_REWARD - TIME_PENALTY);
        assert!(!next.has_pellet(Pos::new(2, 1)));

        // the original state is untouched
        assert_eq!(state.pellets().len(), 10);
        assert_eq!(state.score(), 0.0);
    }

    #[test]
    fn test_stopping_costs_time() {
        let next = corridor().successor(0, &Direction::Stop).unwrap();
        assert_eq!(next.score(), -TIME_PENALTY);
        assert_eq!(next.runner(), Pos::new(1, 1));
    }

    #[test]
    fn test_wall_moves_are_illegal() {
        let state = corridor();
        let err = state.successor(0, &Direction::North).unwrap_err();
        assert!(matches!(err, StateError::IllegalAction { agent: 0, .. }));

        let err = state.successor(1, &Direction::Stop).unwrap_err();
        assert!(matches!(err, StateError::IllegalAction { agent: 1, .. }));
    }

    #[test]
    fn test_chaser_catches_runner() {
        // %P..G%: runner at 1, chaser at 4
        let state = PursuitState::new(&Layout::builtin("tiny").unwrap());
        let state = state.successor(0, &Direction::East).unwrap(); // runner to 2
        let state = state.successor(1, &Direction::West).unwrap(); // chaser to 3
        let state = state.successor(0, &Direction::Stop).unwrap();
        assert_eq!(state.outcome(), Outcome::Ongoing);

        let caught = state.successor(1, &Direction::West).unwrap(); // chaser to 2
        assert_eq!(caught.outcome(), Outcome::Lose);
        assert_eq!(
            caught.score(),
            PELLET_REWARD - 2.0 * TIME_PENALTY - CAUGHT_PENALTY
        );
        assert!(caught.legal_actions(0).is_empty());
        assert!(caught.legal_actions(1).is_empty());
    }

    #[test]
    fn test_last_pellet_beats_collision() {
        // runner eats the last pellet on the chaser's cell
        let state = PursuitState::new(&Layout::builtin("tiny").unwrap());
        let state = state.successor(0, &Direction::East).unwrap();
        let state = state.successor(1, &Direction::West).unwrap(); // chaser on the last pellet
        let done = state.successor(0, &Direction::East).unwrap();
        assert_eq!(done.outcome(), Outcome::Win);
        assert!(done.pellets().is_empty());
    }

    #[test]
    fn test_clearing_the_board_wins() {
        let layout = Layout::parse("%%%%\n%P.%\n%%%%").unwrap();
        let state = PursuitState::new(&layout);
        assert_eq!(state.num_agents(), 1);
        let won = state.successor(0, &Direction::East).unwrap();
        assert_eq!(won.outcome(), Outcome::Win);
        assert_eq!(won.score(), PELLET_REWARD - TIME_PENALTY + WIN_REWARD);
    }
}
