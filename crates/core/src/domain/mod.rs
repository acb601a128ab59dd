// Domain Layer - Queue names, items and snapshots

pub mod queue;

// Re-exports
pub use queue::{Item, QueueName, QueueStats};
