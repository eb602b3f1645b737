use std::fmt::{Display, Formatter};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Queue operation that can fail on an empty queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueOp {
    Front,
    Back,
    Pop,
}

impl QueueOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueOp::Front => "front",
            QueueOp::Back => "back",
            QueueOp::Pop => "pop",
        }
    }
}

impl Display for QueueOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by [`Queue`](crate::core::queue::Queue).
///
/// Container and element failures are never wrapped here; only contract
/// violations of the queue interface itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `front`, `back` or `pop` was called while the queue held no elements.
    #[error("queue::{op}(): empty queue")]
    EmptyQueueAccess { op: QueueOp },
}

impl QueueError {
    pub(crate) fn empty(op: QueueOp) -> Self {
        QueueError::EmptyQueueAccess { op }
    }

    /// Operation that triggered the error
    pub fn op(&self) -> QueueOp {
        match self {
            QueueError::EmptyQueueAccess { op } => *op,
        }
    }
}
