//! Episode runner.
//!
//! Builds the agents for the configured game, plays episodes turn by turn in
//! the cyclic order `0, 1, ..., n-1, 0, ...` and feeds the results into
//! [`ArenaStats`].

use adversarial::{
    next_turn, Agent, Decision, DistributionAgent, GhostAgent, GhostPolicy, Negated, RandomAgent,
    SearchAgent, SearchConfig,
};
use anyhow::{Context, Result};
use engine_core::{GameState, Outcome, PROTAGONIST};
use games_pursuit::{
    chaser_evaluation, pellet_distance_evaluation, DirectionalChaser, Layout, PursuitState,
};
use games_tictactoe::{line_evaluation, State as TicTacToe};
use tracing::{debug, info};

use crate::config::{Config, Game, GhostKind};
use crate::stats::{ArenaStats, EpisodeOutcome};

/// Result of one episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeReport {
    pub outcome: EpisodeOutcome,
    pub turns: u32,
    pub score: f64,
}

pub struct Arena {
    config: Config,
    stats: ArenaStats,
}

impl Arena {
    pub fn new(config: Config) -> Result<Self> {
        let game = config.game()?;
        Ok(Self {
            stats: ArenaStats::new(&game.to_string()),
            config,
        })
    }

    pub fn stats(&self) -> &ArenaStats {
        &self.stats
    }

    /// Play every configured episode.
    pub fn run(&mut self) -> Result<()> {
        let game = self.config.game()?;
        info!(
            %game,
            episodes = self.config.episodes,
            strategy = %self.config.strategy,
            depth = self.config.depth,
            "Starting arena"
        );

        for episode in 0..self.config.episodes {
            let report = match game {
                Game::Pursuit => self.run_pursuit_episode(episode)?,
                Game::TicTacToe => self.run_tictactoe_episode(episode)?,
            };
            self.stats
                .record_episode(report.outcome, report.turns, report.score);
            info!(
                episode,
                outcome = ?report.outcome,
                turns = report.turns,
                score = report.score,
                "Episode complete"
            );
        }

        Ok(())
    }

    /// Seed for agent `agent` in `episode`, so runs with a fixed seed are
    /// reproducible while agents still draw from different streams.
    fn agent_seed(&self, episode: u32, agent: usize) -> Option<u64> {
        self.config.seed().map(|seed| {
            seed.wrapping_mul(1_000_003)
                .wrapping_add(u64::from(episode) * 1_009)
                .wrapping_add(agent as u64)
        })
    }

    fn search_config(&self, episode: u32, agent: usize) -> Result<SearchConfig> {
        let mut config = SearchConfig::new(self.config.strategy()?, self.config.depth);
        config.seed = self.agent_seed(episode, agent);
        Ok(config)
    }

    fn run_pursuit_episode(&mut self, episode: u32) -> Result<EpisodeReport> {
        let layout: Layout = self.config.layout()?;
        let state = PursuitState::new(&layout);

        let mut agents: Vec<Box<dyn Agent<PursuitState>>> = vec![Box::new(SearchAgent::new(
            PROTAGONIST,
            pellet_distance_evaluation,
            self.search_config(episode, PROTAGONIST)?,
        ))];
        for index in 1..layout.num_agents() {
            agents.push(self.chaser(episode, index)?);
        }

        play_episode(
            &mut agents,
            state,
            self.config.max_turns,
            episode,
            &mut self.stats,
        )
    }

    fn chaser(&self, episode: u32, index: usize) -> Result<Box<dyn Agent<PursuitState>>> {
        let seed = self.agent_seed(episode, index);
        let agent: Box<dyn Agent<PursuitState>> = match self.config.ghost_kind()? {
            GhostKind::Minimax => {
                let policy = match seed {
                    Some(seed) => GhostPolicy::with_seed(
                        index,
                        self.config.ghost_depth,
                        chaser_evaluation,
                        seed,
                    ),
                    None => GhostPolicy::new(index, self.config.ghost_depth, chaser_evaluation),
                }
                .with_context(|| format!("Failed to build ghost policy for agent {}", index))?;
                Box::new(GhostAgent::new(policy))
            }
            GhostKind::Directional => Box::new(DistributionAgent::new(
                index,
                DirectionalChaser::new(self.config.prob_attack),
                seed,
            )),
            GhostKind::Random => Box::new(RandomAgent::new(index, seed)),
        };
        Ok(agent)
    }

    fn run_tictactoe_episode(&mut self, episode: u32) -> Result<EpisodeReport> {
        let mut agents: Vec<Box<dyn Agent<TicTacToe>>> = vec![
            Box::new(SearchAgent::new(
                0,
                line_evaluation,
                self.search_config(episode, 0)?,
            )),
            Box::new(SearchAgent::new(
                1,
                Negated(line_evaluation),
                self.search_config(episode, 1)?,
            )),
        ];

        play_episode(
            &mut agents,
            TicTacToe::new(),
            self.config.max_turns,
            episode,
            &mut self.stats,
        )
    }
}

/// Play one episode to completion or until `max_turns` agent moves.
///
/// The episode ends when the state is decided, when a full round passes
/// without anybody moving (a draw), or at the turn cap.
pub fn play_episode<S: GameState + 'static>(
    agents: &mut [Box<dyn Agent<S>>],
    mut state: S,
    max_turns: u32,
    episode: u32,
    stats: &mut ArenaStats,
) -> Result<EpisodeReport> {
    let num_agents = state.num_agents();
    let mut agent = PROTAGONIST;
    let mut turns = 0;
    let mut idle = 0;

    let outcome = loop {
        match state.outcome() {
            Outcome::Win => break EpisodeOutcome::Win,
            Outcome::Lose => break EpisodeOutcome::Lose,
            Outcome::Ongoing => {}
        }
        if idle >= num_agents {
            break EpisodeOutcome::Draw;
        }
        if turns >= max_turns {
            break EpisodeOutcome::Unfinished;
        }

        let player = agents
            .get_mut(agent)
            .with_context(|| format!("No agent registered for index {}", agent))?;
        let decision = player
            .get_action(&state)
            .with_context(|| format!("Agent {} failed to choose an action", agent))?;
        if let Some(search) = player.last_stats() {
            stats.record_search(search);
        }

        match decision {
            Decision::Play(action) => {
                debug!(episode, turn = turns, agent, action = ?action, "Turn");
                state = state.successor(agent, &action)?;
                idle = 0;
            }
            Decision::NoOp => {
                debug!(episode, turn = turns, agent, "No move");
                idle += 1;
            }
        }

        turns += 1;
        agent = next_turn(agent, num_agents).agent;
    };

    Ok(EpisodeReport {
        outcome,
        turns,
        score: state.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(game: &str) -> Config {
        Config {
            game: game.into(),
            layout: "tiny".into(),
            episodes: 2,
            max_turns: 50,
            strategy: "alpha_beta".into(),
            depth: 2,
            ghost_policy: "directional".into(),
            ghost_depth: 1,
            prob_attack: 0.8,
            seed: Some(3),
            log_level: "info".into(),
        }
    }

    #[test]
    fn test_pursuit_runner_clears_tiny_board() {
        let mut arena = Arena::new(config("pursuit")).unwrap();
        arena.run().unwrap();

        let snapshot = arena.stats().snapshot();
        assert_eq!(snapshot.episodes, 2);
        assert_eq!(snapshot.wins, 2);
        assert_eq!(snapshot.decisions, 4);
        assert!((snapshot.avg_turns - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_minimax_ghosts_are_searched() {
        let mut config = config("pursuit");
        config.ghost_policy = "minimax".into();
        config.episodes = 1;
        let mut arena = Arena::new(config).unwrap();
        arena.run().unwrap();

        // runner moves twice, the ghost once
        let snapshot = arena.stats().snapshot();
        assert_eq!(snapshot.wins, 1);
        assert_eq!(snapshot.decisions, 3);
    }

    #[test]
    fn test_tictactoe_self_play_is_a_draw() {
        // deep enough to see every game to the end
        let mut config = config("tictactoe");
        config.depth = 5;
        config.episodes = 1;
        let mut arena = Arena::new(config).unwrap();
        arena.run().unwrap();

        let snapshot = arena.stats().snapshot();
        assert_eq!(snapshot.draws, 1);
        assert_eq!(snapshot.wins + snapshot.losses, 0);
        // nine moves then one idle round
        assert!((snapshot.avg_turns - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_turn_cap() {
        let mut config = config("pursuit");
        config.layout = "open".into();
        config.max_turns = 4;
        config.episodes = 1;
        let mut arena = Arena::new(config).unwrap();
        arena.run().unwrap();

        let snapshot = arena.stats().snapshot();
        assert_eq!(snapshot.unfinished, 1);
        assert!((snapshot.avg_turns - 4.0).abs() < 1e-9);
    }
}
