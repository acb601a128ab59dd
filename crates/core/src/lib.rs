// Handoff Core - Named Blocking Queues & Ports
// NO runtime or transport dependencies

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{Queue, QueueRegistry};
pub use error::{AppError, Result};
