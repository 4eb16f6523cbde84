//! Synthetic game states for exercising search code.
//!
//! [`TreeState`] walks an explicit game tree whose leaves carry fixed scores,
//! which makes hand-computed minimax values easy to assert against.
//! [`RingState`] is a cyclic state graph: agents step around a ring of cells
//! forever, so only a depth bound can stop a search over it.
//!
//! Both count how many states they hand out so tests can bound the work a
//! search performed independently of the engine's own bookkeeping.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::StateError;
use crate::state::{AgentIndex, GameState, Outcome};

/// A node of an explicit game tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Non-terminal node without children; its score is the payload.
    Leaf(f64),
    /// Decided node with a fixed score.
    Terminal(Outcome, f64),
    /// Interior node. `value` is what a depth cutoff sees here.
    Branch {
        value: f64,
        children: Vec<(String, Rc<TreeNode>)>,
    },
}

impl TreeNode {
    pub fn leaf(value: f64) -> Self {
        TreeNode::Leaf(value)
    }

    pub fn terminal(outcome: Outcome, value: f64) -> Self {
        TreeNode::Terminal(outcome, value)
    }

    /// Interior node with a cutoff value of 0.0.
    pub fn branch(children: Vec<(&str, TreeNode)>) -> Self {
        Self::branch_valued(0.0, children)
    }

    pub fn branch_valued(value: f64, children: Vec<(&str, TreeNode)>) -> Self {
        TreeNode::Branch {
            value,
            children: children
                .into_iter()
                .map(|(label, child)| (label.to_string(), Rc::new(child)))
                .collect(),
        }
    }

    /// Complete tree of `plies` levels with `branching` children per node.
    ///
    /// Leaves are filled left to right from `leaf_value`; children are
    /// labelled `"0"`, `"1"`, ...
    pub fn uniform(branching: usize, plies: usize, leaf_value: &mut impl FnMut() -> f64) -> Self {
        if plies == 0 {
            return TreeNode::Leaf(leaf_value());
        }
        let children = (0..branching)
            .map(|i| {
                let label = i.to_string();
                (label, Rc::new(Self::uniform(branching, plies - 1, leaf_value)))
            })
            .collect();
        TreeNode::Branch {
            value: 0.0,
            children,
        }
    }

    /// Number of leaf and terminal nodes below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) | TreeNode::Terminal(..) => 1,
            TreeNode::Branch { children, .. } => {
                children.iter().map(|(_, child)| child.leaf_count()).sum()
            }
        }
    }
}

/// Position inside an explicit game tree.
///
/// Every agent moves by picking a child label; the tree itself does not care
/// whose turn it is, which lets one tree serve any number of agents.
#[derive(Debug, Clone)]
pub struct TreeState {
    node: Rc<TreeNode>,
    agents: usize,
    leaf_visits: Rc<Cell<usize>>,
    states_created: Rc<Cell<usize>>,
}

impl TreeState {
    pub fn new(root: TreeNode, agents: usize) -> Self {
        Self {
            node: Rc::new(root),
            agents,
            leaf_visits: Rc::new(Cell::new(0)),
            states_created: Rc::new(Cell::new(0)),
        }
    }

    /// Leaf or terminal states produced by `successor` so far (shared by clones).
    pub fn leaf_visits(&self) -> usize {
        self.leaf_visits.get()
    }

    /// States produced by `successor` so far (shared by clones).
    pub fn states_created(&self) -> usize {
        self.states_created.get()
    }

    pub fn node(&self) -> &TreeNode {
        &self.node
    }
}

impl GameState for TreeState {
    type Action = String;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<String> {
        match self.node.as_ref() {
            TreeNode::Branch { children, .. } => {
                children.iter().map(|(label, _)| label.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    fn successor(&self, agent: AgentIndex, action: &String) -> Result<Self, StateError> {
        self.check_agent(agent)?;
        let child = match self.node.as_ref() {
            TreeNode::Branch { children, .. } => children
                .iter()
                .find(|(label, _)| label == action)
                .map(|(_, child)| Rc::clone(child)),
            _ => None,
        }
        .ok_or_else(|| StateError::illegal(agent, action))?;

        self.states_created.set(self.states_created.get() + 1);
        if !matches!(child.as_ref(), TreeNode::Branch { .. }) {
            self.leaf_visits.set(self.leaf_visits.get() + 1);
        }

        Ok(Self {
            node: child,
            agents: self.agents,
            leaf_visits: Rc::clone(&self.leaf_visits),
            states_created: Rc::clone(&self.states_created),
        })
    }

    fn outcome(&self) -> Outcome {
        match self.node.as_ref() {
            TreeNode::Terminal(outcome, _) => *outcome,
            _ => Outcome::Ongoing,
        }
    }

    fn score(&self) -> f64 {
        match self.node.as_ref() {
            TreeNode::Leaf(value) | TreeNode::Terminal(_, value) => *value,
            TreeNode::Branch { value, .. } => *value,
        }
    }
}

/// Moves available on a [`RingState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Back,
    Stay,
    Forward,
}

/// Agents walking around a ring of scored cells.
///
/// The state graph is cyclic (stepping forward `cells` times returns to the
/// start) and never terminal, so it exercises depth cutoff in isolation.
#[derive(Debug, Clone)]
pub struct RingState {
    cells: Rc<Vec<f64>>,
    positions: Vec<usize>,
    states_created: Rc<Cell<usize>>,
}

impl RingState {
    /// Ring with the given cell scores and every agent starting on cell 0.
    pub fn new(cells: Vec<f64>, agents: usize) -> Self {
        Self {
            cells: Rc::new(cells),
            positions: vec![0; agents],
            states_created: Rc::new(Cell::new(0)),
        }
    }

    pub fn position(&self, agent: AgentIndex) -> usize {
        self.positions[agent]
    }

    /// States produced by `successor` so far (shared by clones).
    pub fn states_created(&self) -> usize {
        self.states_created.get()
    }
}

impl GameState for RingState {
    type Action = Step;

    fn num_agents(&self) -> usize {
        self.positions.len()
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Step> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        vec![Step::Back, Step::Stay, Step::Forward]
    }

    fn successor(&self, agent: AgentIndex, action: &Step) -> Result<Self, StateError> {
        self.check_agent(agent)?;
        let len = self.cells.len();
        if len == 0 {
            return Err(StateError::illegal(agent, action));
        }

        let mut positions = self.positions.clone();
        positions[agent] = match action {
            Step::Back => (positions[agent] + len - 1) % len,
            Step::Stay => positions[agent],
            Step::Forward => (positions[agent] + 1) % len,
        };
        self.states_created.set(self.states_created.get() + 1);

        Ok(Self {
            cells: Rc::clone(&self.cells),
            positions,
            states_created: Rc::clone(&self.states_created),
        })
    }

    fn outcome(&self) -> Outcome {
        Outcome::Ongoing
    }

    /// Protagonist's cell score minus the mean of the adversaries' cells.
    fn score(&self) -> f64 {
        let Some((&own, others)) = self.positions.split_first() else {
            return 0.0;
        };
        if self.cells.is_empty() {
            return 0.0;
        }
        let own = self.cells[own];
        if others.is_empty() {
            return own;
        }
        let pressure: f64 =
            others.iter().map(|&p| self.cells[p]).sum::<f64>() / others.len() as f64;
        own - pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TreeState {
        TreeState::new(
            TreeNode::branch(vec![
                ("A", TreeNode::branch(vec![("A", TreeNode::leaf(3.0)), ("B", TreeNode::leaf(9.0))])),
                ("B", TreeNode::branch(vec![("A", TreeNode::leaf(2.0)), ("B", TreeNode::leaf(8.0))])),
            ]),
            2,
        )
    }

    #[test]
    fn test_tree_navigation() {
        let root = fixture();
        assert_eq!(root.legal_actions(0), vec!["A".to_string(), "B".to_string()]);

        let left = root.successor(0, &"A".to_string()).unwrap();
        let leaf = left.successor(1, &"B".to_string()).unwrap();
        assert_eq!(leaf.score(), 9.0);
        assert!(leaf.legal_actions(0).is_empty());
        assert_eq!(root.leaf_visits(), 1);
        assert_eq!(root.states_created(), 2);
    }

    #[test]
    fn test_tree_rejects_unknown_label() {
        let root = fixture();
        let err = root.successor(0, &"C".to_string()).unwrap_err();
        assert!(matches!(err, StateError::IllegalAction { agent: 0, .. }));
    }

    #[test]
    fn test_tree_rejects_agent_out_of_range() {
        let root = fixture();
        let err = root.successor(2, &"A".to_string()).unwrap_err();
        assert_eq!(
            err,
            StateError::AgentOutOfRange {
                agent: 2,
                num_agents: 2
            }
        );
    }

    #[test]
    fn test_uniform_tree_shape() {
        let mut next = 0.0;
        let tree = TreeNode::uniform(3, 2, &mut || {
            next += 1.0;
            next
        });
        assert_eq!(tree.leaf_count(), 9);
        let state = TreeState::new(tree, 2);
        let leaf = state
            .successor(0, &"2".to_string())
            .and_then(|s| s.successor(1, &"2".to_string()))
            .unwrap();
        assert_eq!(leaf.score(), 9.0);
    }

    #[test]
    fn test_terminal_node_outcome() {
        let state = TreeState::new(
            TreeNode::branch(vec![("win", TreeNode::terminal(Outcome::Win, 100.0))]),
            1,
        );
        let won = state.successor(0, &"win".to_string()).unwrap();
        assert_eq!(won.outcome(), Outcome::Win);
        assert_eq!(won.score(), 100.0);
    }

    #[test]
    fn test_ring_wraps_around() {
        let ring = RingState::new(vec![0.0, 1.0, 2.0], 2);
        let back = ring.successor(0, &Step::Back).unwrap();
        assert_eq!(back.position(0), 2);

        let mut state = ring.clone();
        for _ in 0..3 {
            state = state.successor(1, &Step::Forward).unwrap();
        }
        assert_eq!(state.position(1), 0);
        assert_eq!(ring.states_created(), 4);
    }

    #[test]
    fn test_ring_score() {
        let ring = RingState::new(vec![5.0, 1.0, 3.0], 3);
        let moved = ring
            .successor(1, &Step::Forward)
            .and_then(|s| s.successor(2, &Step::Back))
            .unwrap();
        // own 5.0, adversaries on 1.0 and 3.0
        assert!((moved.score() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_score_without_agents_or_cells() {
        assert_eq!(RingState::new(vec![5.0, 1.0], 0).score(), 0.0);
        assert_eq!(RingState::new(Vec::new(), 2).score(), 0.0);
    }
}
