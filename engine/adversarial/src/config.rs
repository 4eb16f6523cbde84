//! Search configuration parameters.

use crate::strategy::Strategy;

/// Configuration for adversarial search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// How child values are combined into a node value.
    pub strategy: Strategy,

    /// Number of full agent cycles to look ahead.
    /// Search cost grows as b^(max_depth * num_agents), so keep this small.
    /// At 0 the searching agent still compares its immediate successors.
    pub max_depth: u32,

    /// Seed for the tie-breaking RNG.
    /// `None` seeds from OS entropy; set it for reproducible minimax play.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            max_depth: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn new(strategy: Strategy, max_depth: u32) -> Self {
        Self {
            strategy,
            max_depth,
            seed: None,
        }
    }

    /// Create a fast, reproducible config for testing.
    pub fn for_testing() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            max_depth: 2,
            seed: Some(42),
        }
    }

    /// Builder pattern: set strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set maximum depth.
    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder pattern: set RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
