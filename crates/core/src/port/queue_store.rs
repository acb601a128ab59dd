// Queue Store Port - the fixed surface host adapters call into

use crate::domain::{Item, QueueName, QueueStats};

/// Named queue operations, keyed by queue name.
///
/// Unknown names are created on first reference, so no operation fails.
/// An empty queue is reported as `None`, never as an error.
pub trait QueueStore: Send + Sync {
    /// Append `item` to the back of `queue` and wake one blocked popper.
    /// Returns the queue length right after this push.
    fn push(&self, queue: &str, item: Item) -> usize;

    /// Remove the front item without blocking
    fn pop(&self, queue: &str) -> Option<Item>;

    /// Remove the front item, waiting up to `timeout_ms` for one to arrive
    ///
    /// `timeout_ms <= 0` never waits. This call parks the current thread;
    /// async callers must run it on a blocking pool.
    fn pop_with_timeout(&self, queue: &str, timeout_ms: i64) -> Option<Item>;

    /// Front item without removing it
    fn peek(&self, queue: &str) -> Option<Item>;

    fn len(&self, queue: &str) -> usize;

    fn is_empty(&self, queue: &str) -> bool {
        self.len(queue) == 0
    }

    /// Drop every item in `queue`, returning how many were discarded
    fn clear(&self, queue: &str) -> usize;

    /// Names of every queue created so far (unordered)
    fn list_names(&self) -> Vec<QueueName>;

    /// Per-queue counters (unordered)
    fn stats(&self) -> Vec<QueueStats>;
}
