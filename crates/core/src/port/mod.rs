// Port Layer - Interfaces between the queues and their hosts

pub mod queue_store;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use queue_store::QueueStore;
pub use time_provider::TimeProvider;
