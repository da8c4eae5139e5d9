use crate::error::EvalError;

static NOT_REACHED: NodeOutcome = NodeOutcome::NotReached;

/// The outcome of evaluating one node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeOutcome {
    /// The node's synthesized value.
    Value(f64),
    /// The node, or one of its descendants, failed with this error.
    Failed(EvalError),
    /// Evaluation stopped before this node was visited.
    NotReached,
}

impl NodeOutcome {
    /// Returns the value if the node evaluated successfully.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Failed(_) | Self::NotReached => None,
        }
    }
}

/// Per-node outcomes of one evaluation pass, in pre-order.
///
/// Entry `i` belongs to the `i`-th node of a pre-order walk of the evaluated
/// tree. Evaluation stops at the first error, so a trace may be shorter than
/// the tree; missing entries read as [`NodeOutcome::NotReached`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    outcomes: Vec<NodeOutcome>,
}

impl Trace {
    /// Returns the outcome of the node at `index` in pre-order.
    #[must_use]
    pub fn outcome(&self, index: usize) -> &NodeOutcome {
        self.outcomes.get(index).unwrap_or(&NOT_REACHED)
    }

    /// Outcome of the root node.
    #[must_use]
    pub fn root(&self) -> &NodeOutcome {
        self.outcome(0)
    }

    /// Number of nodes that were visited.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.outcomes.len()
    }
}

/// Observes an evaluation pass node by node.
///
/// `enter` is called before a node's children are evaluated and returns a slot
/// that `leave` later fills with the node's result. Plain evaluation uses the
/// no-op recorder `()`.
pub trait Recorder {
    /// Reserves a slot for the node about to be evaluated.
    fn enter(&mut self) -> usize;
    /// Stores the node's result in its slot.
    fn leave(&mut self, slot: usize, result: &Result<f64, EvalError>);
}

impl Recorder for () {
    fn enter(&mut self) -> usize {
        0
    }

    fn leave(&mut self, _slot: usize, _result: &Result<f64, EvalError>) {}
}

impl Recorder for Trace {
    fn enter(&mut self) -> usize {
        self.outcomes.push(NodeOutcome::NotReached);
        self.outcomes.len() - 1
    }

    fn leave(&mut self, slot: usize, result: &Result<f64, EvalError>) {
        if let Some(outcome) = self.outcomes.get_mut(slot) {
            *outcome = match result {
                Ok(value) => NodeOutcome::Value(*value),
                Err(error) => NodeOutcome::Failed(error.clone()),
            };
        }
    }
}
