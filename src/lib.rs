pub mod core;

pub use crate::core::{
    container::BackingContainer,
    error::{QueueError, QueueOp},
    queue::Queue,
};
