//! Arena statistics.
//!
//! Tracks episode outcomes and the work done by searching agents, and
//! renders a JSON snapshot once the run is over.

use adversarial::SearchStats;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeOutcome {
    /// The protagonist won.
    Win,
    /// The protagonist lost.
    Lose,
    /// Nobody could move and the game was undecided.
    Draw,
    /// The turn cap was reached.
    Unfinished,
}

/// Aggregated arena statistics.
#[derive(Debug)]
pub struct ArenaStats {
    game: String,
    episodes: u32,
    wins: u32,
    losses: u32,
    draws: u32,
    unfinished: u32,
    total_turns: u64,
    total_score: f64,
    decisions: u64,
    search: SearchStats,
    start_time: Instant,
}

/// Serializable stats for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArenaStatsSnapshot {
    pub game: String,
    pub episodes: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub avg_score: f64,
    pub avg_turns: f64,
    pub decisions: u64,
    pub avg_nodes_per_decision: f64,
    pub avg_search_us: f64,
    pub prunes: u64,
    pub runtime_seconds: f64,
}

impl ArenaStats {
    pub fn new(game: &str) -> Self {
        Self {
            game: game.to_string(),
            episodes: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            unfinished: 0,
            total_turns: 0,
            total_score: 0.0,
            decisions: 0,
            search: SearchStats::default(),
            start_time: Instant::now(),
        }
    }

    /// Record a finished episode.
    pub fn record_episode(&mut self, outcome: EpisodeOutcome, turns: u32, score: f64) {
        self.episodes += 1;
        self.total_turns += u64::from(turns);
        self.total_score += score;
        match outcome {
            EpisodeOutcome::Win => self.wins += 1,
            EpisodeOutcome::Lose => self.losses += 1,
            EpisodeOutcome::Draw => self.draws += 1,
            EpisodeOutcome::Unfinished => self.unfinished += 1,
        }
    }

    /// Record one decision made by a searching agent.
    pub fn record_search(&mut self, stats: &SearchStats) {
        self.decisions += 1;
        self.search.add(stats);
    }

    pub fn snapshot(&self) -> ArenaStatsSnapshot {
        let episodes = f64::from(self.episodes);
        let decisions = self.decisions as f64;
        let per_episode = |total: f64| if self.episodes > 0 { total / episodes } else { 0.0 };
        let per_decision = |total: f64| if self.decisions > 0 { total / decisions } else { 0.0 };

        ArenaStatsSnapshot {
            game: self.game.clone(),
            episodes: self.episodes,
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
            unfinished: self.unfinished,
            avg_score: per_episode(self.total_score),
            avg_turns: per_episode(self.total_turns as f64),
            decisions: self.decisions,
            avg_nodes_per_decision: per_decision(self.search.nodes_visited as f64),
            avg_search_us: per_decision(self.search.elapsed_us as f64),
            prunes: self.search.prunes,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
