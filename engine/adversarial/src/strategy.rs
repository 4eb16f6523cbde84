//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a search combines child values into a node value.
///
/// Chosen once when the search is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Adversaries minimize; ties broken uniformly at random.
    Minimax,
    /// Minimax with alpha-beta pruning; ties go to the first best action.
    #[serde(alias = "alphabeta")]
    AlphaBeta,
    /// Adversaries are uniform chance nodes.
    Expectimax,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha_beta",
            Strategy::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown search strategy '{0}', expected one of minimax, alpha_beta, expectimax")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alpha_beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("minimax".parse::<Strategy>().unwrap(), Strategy::Minimax);
        assert_eq!("alpha-beta".parse::<Strategy>().unwrap(), Strategy::AlphaBeta);
        assert_eq!("AlphaBeta".parse::<Strategy>().unwrap(), Strategy::AlphaBeta);
        assert_eq!(" expectimax ".parse::<Strategy>().unwrap(), Strategy::Expectimax);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mcts".parse::<Strategy>().unwrap_err();
        assert!(err.to_string().contains("mcts"));
    }

    #[test]
    fn test_display_parses_back() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
