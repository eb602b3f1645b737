pub mod container;
pub mod error;
pub mod log;
pub mod queue;
