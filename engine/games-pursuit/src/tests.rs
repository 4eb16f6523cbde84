use super::*;
use adversarial::{
    choose_action, Agent, Decision, DistributionAgent, GhostAgent, GhostPolicy, SearchAgent,
    SearchConfig, Strategy,
};
use engine_core::{GameState, Outcome};

fn layout(name: &str) -> PursuitState {
    PursuitState::new(&Layout::builtin(name).unwrap())
}

#[test]
fn test_runner_heads_for_pellets() {
    let state = layout("corridor");
    for strategy in Strategy::ALL {
        let decision = choose_action(strategy, &state, 1, &pellet_distance_evaluation, 0).unwrap();
        let action = decision.into_action().unwrap();
        assert!(
            matches!(action, Direction::South | Direction::East),
            "{} chose {:?}",
            strategy,
            action
        );
    }
}

#[test]
fn test_runner_takes_the_win() {
    // runner at 2 with the chaser sitting on the last pellet at 3
    let state = layout("tiny")
        .successor(0, &Direction::East)
        .unwrap()
        .successor(1, &Direction::West)
        .unwrap();
    let decision =
        choose_action(Strategy::AlphaBeta, &state, 2, &pellet_distance_evaluation, 0).unwrap();
    assert_eq!(decision, Decision::Play(Direction::East));
}

#[test]
fn test_ghost_closes_in() {
    // West leaves the runner at best 4 steps away, South at best 5
    let state = layout("corridor");
    let mut policy = GhostPolicy::with_seed(1, 1, chaser_evaluation, 5).unwrap();
    let result = policy.search(&state).unwrap();
    assert_eq!(result.decision, Decision::Play(Direction::West));
    assert_eq!(result.value, -4.0);
}

#[test]
fn test_ghost_agent_records_stats() {
    let state = layout("corridor");
    let mut ghost = GhostAgent::new(GhostPolicy::with_seed(1, 1, chaser_evaluation, 5).unwrap());
    assert!(Agent::<PursuitState>::last_stats(&ghost).is_none());

    let decision = ghost.get_action(&state).unwrap();
    assert_eq!(decision, Decision::Play(Direction::West));
    let stats = Agent::<PursuitState>::last_stats(&ghost).unwrap();
    assert_eq!(stats.max_ply, 2);
    assert!(stats.leaves_evaluated >= 5);
}

#[test]
fn test_directional_chaser_sampling() {
    let state = layout("corridor");
    let mut chaser = DistributionAgent::new(1, DirectionalChaser::default(), Some(11));
    let mut west = 0;
    for _ in 0..1000 {
        match chaser.get_action(&state).unwrap() {
            Decision::Play(Direction::West) => west += 1,
            Decision::Play(Direction::South) => {}
            other => panic!("unexpected decision {:?}", other),
        }
    }
    assert!((850..=950).contains(&west), "west chosen {} times", west);
}

#[test]
fn test_episode_on_tiny_board() {
    let mut state = layout("tiny");
    let mut runner = SearchAgent::new(
        0,
        pellet_distance_evaluation,
        SearchConfig::new(Strategy::AlphaBeta, 2).with_seed(1),
    );
    let mut chaser = DistributionAgent::new(1, DirectionalChaser::default(), Some(2));

    for turn in 0..20 {
        if state.outcome().is_terminal() {
            break;
        }
        let agent = turn % state.num_agents();
        let decision = if agent == 0 {
            runner.get_action(&state).unwrap()
        } else {
            chaser.get_action(&state).unwrap()
        };
        if let Decision::Play(action) = decision {
            state = state.successor(agent, &action).unwrap();
        }
    }

    assert_eq!(state.outcome(), Outcome::Win);
    assert!(state.pellets().is_empty());
    assert!(Agent::<PursuitState>::last_stats(&runner).is_some());
}

#[test]
fn test_trapped_runner_search_completes() {
    let state = layout("trapped");
    assert_eq!(state.num_agents(), 3);
    for strategy in Strategy::ALL {
        let decision = choose_action(strategy, &state, 2, &pellet_distance_evaluation, 0).unwrap();
        assert!(!decision.is_noop());
    }
}
