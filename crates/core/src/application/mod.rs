// Application Layer - Queues, registry and host-facing limits

pub mod constants;
pub mod limits;
pub mod queue;
pub mod registry;

// Re-exports
pub use limits::RequestLimits;
pub use queue::Queue;
pub use registry::QueueRegistry;
