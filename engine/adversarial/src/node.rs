//! Values produced while walking the game tree.

/// Value of a searched node and, where a parent decides by it, the action
/// that achieved the value.
///
/// Results are built by one call, read by its parent and dropped; nothing
/// from a search outlives it.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeResult<A> {
    pub value: f64,
    pub action: Option<A>,
}

impl<A> NodeResult<A> {
    /// Result of a node that was evaluated rather than expanded.
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            action: None,
        }
    }

    pub fn new(value: f64, action: Option<A>) -> Self {
        Self { value, action }
    }
}

/// What the searching agent should do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decision<A> {
    /// Play this action.
    Play(A),
    /// The agent has nothing to play (no legal action, or the game is over).
    NoOp,
}

impl<A> Decision<A> {
    pub fn is_noop(&self) -> bool {
        matches!(self, Decision::NoOp)
    }

    pub fn action(&self) -> Option<&A> {
        match self {
            Decision::Play(action) => Some(action),
            Decision::NoOp => None,
        }
    }

    pub fn into_action(self) -> Option<A> {
        match self {
            Decision::Play(action) => Some(action),
            Decision::NoOp => None,
        }
    }
}

impl<A> From<Option<A>> for Decision<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Decision::Play(action),
            None => Decision::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_from_option() {
        assert_eq!(Decision::from(Some(3)), Decision::Play(3));
        assert!(Decision::<u8>::from(None).is_noop());
    }

    #[test]
    fn test_decision_accessors() {
        let play = Decision::Play("north");
        assert_eq!(play.action(), Some(&"north"));
        assert_eq!(play.into_action(), Some("north"));
        assert_eq!(Decision::<&str>::NoOp.action(), None);
    }
}
