//! TicTacToe game implementation for the Lookahead engine
//!
//! This crate provides a small reference implementation of the
//! [`GameState`] trait: X is agent 0 (the protagonist) and O is agent 1.
//!
//! # Usage
//!
//! ```rust
//! use adversarial::{choose_action, Decision, ScoreEvaluator, Strategy};
//! use games_tictactoe::{Action, State};
//!
//! // X to move with two in the top row
//! let state = State::new()
//!     .make_move(0)
//!     .make_move(3)
//!     .make_move(1)
//!     .make_move(4);
//!
//! let decision = choose_action(Strategy::AlphaBeta, &state, 1, &ScoreEvaluator, 0).unwrap();
//! assert_eq!(decision, Decision::Play(Action::Place(2)));
//! ```

use engine_core::{AgentIndex, GameState, Outcome, StateError};

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: 1, // X goes first
            winner: 0,
        }
    }

    /// Build a state from a board, deriving whose turn it is and the winner.
    ///
    /// Returns `None` if the board contains an invalid cell or could not
    /// arise from alternating play with X first: the piece counts are off,
    /// both players have a line, or a player kept moving after the winner's
    /// last move.
    pub fn from_board(board: [u8; 9]) -> Option<Self> {
        if board.iter().any(|&cell| cell > 2) {
            return None;
        }
        let xs = board.iter().filter(|&&cell| cell == 1).count();
        let os = board.iter().filter(|&&cell| cell == 2).count();
        if xs != os && xs != os + 1 {
            return None;
        }
        match (Self::has_line(&board, 1), Self::has_line(&board, 2)) {
            (true, true) => return None,
            (true, false) if xs != os + 1 => return None,
            (false, true) if xs != os => return None,
            _ => {}
        }
        Some(Self {
            board,
            current_player: if xs == os { 1 } else { 2 },
            winner: Self::check_winner(&board),
        })
    }

    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    /// Agent whose turn it is (0 = X, 1 = O).
    pub fn to_move(&self) -> AgentIndex {
        usize::from(self.current_player - 1)
    }

    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    pub fn winner(&self) -> u8 {
        self.winner
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;

        // Check for winner
        new_state.winner = Self::check_winner(&new_state.board);

        // Switch player if game not over
        if new_state.winner == 0 {
            new_state.current_player = if self.current_player == 1 { 2 } else { 1 };
        }

        new_state
    }

    /// Check for winner on the board
    fn has_line(board: &[u8; 9], player: u8) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| board[cell] == player))
    }

    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a]; // Return the winning player
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != 0) {
            return 3; // Draw
        }

        0 // Game ongoing
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }
}

impl GameState for State {
    type Action = Action;

    fn num_agents(&self) -> usize {
        2
    }

    /// Empty unless it is `agent`'s turn and the game is still open.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action> {
        if agent != self.to_move() {
            return Vec::new();
        }
        self.legal_moves().into_iter().map(Action::Place).collect()
    }

    fn successor(&self, agent: AgentIndex, action: &Action) -> Result<Self, StateError> {
        self.check_agent(agent)?;
        if !self.legal_actions(agent).contains(action) {
            return Err(StateError::illegal(agent, action));
        }
        Ok(self.make_move(action.position()))
    }

    /// A draw is not a decided outcome here; it ends the game because nobody
    /// has a legal move left.
    fn outcome(&self) -> Outcome {
        match self.winner {
            1 => Outcome::Win,
            2 => Outcome::Lose,
            _ => Outcome::Ongoing,
        }
    }

    fn score(&self) -> f64 {
        match self.winner {
            1 => 1.0,
            2 => -1.0,
            _ => 0.0,
        }
    }
}

/// Heuristic for depth-limited search, from X's point of view.
///
/// Decided games score +/-100. Otherwise every line still open to one side
/// counts for that side, weighted by how many pieces it already holds.
pub fn line_evaluation(state: &State) -> f64 {
    match state.winner {
        1 => return 100.0,
        2 => return -100.0,
        3 => return 0.0,
        _ => {}
    }

    LINES
        .iter()
        .map(|line| {
            let xs = line.iter().filter(|&&i| state.board[i] == 1).count() as i32;
            let os = line.iter().filter(|&&i| state.board[i] == 2).count() as i32;
            match (xs, os) {
                (0, 0) => 0.0,
                (x, 0) => f64::from(x * x),
                (0, o) => -f64::from(o * o),
                _ => 0.0,
            }
        })
        .sum()
}
