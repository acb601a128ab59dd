// Queue Registry - name to Queue mapping, sole creator of queues

use crate::application::queue::Queue;
use crate::domain::{Item, QueueName, QueueStats};
use crate::port::time_provider::SystemTimeProvider;
use crate::port::{QueueStore, TimeProvider};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of named queues, created lazily on first reference.
///
/// The registry lock only guards membership. It is released before any
/// queue lock is taken, so the two are never held together.
pub struct QueueRegistry {
    queues: RwLock<HashMap<QueueName, Arc<Queue>>>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueRegistry {
    pub fn new() -> Self {
        Self::with_time_provider(Arc::new(SystemTimeProvider))
    }

    pub fn with_time_provider(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queues: RwLock::new(HashMap::new()),
            time_provider,
        }
    }

    /// Existing queue for `name`, or a new empty one.
    ///
    /// Concurrent first callers for the same name all get the same instance.
    pub fn get_or_create(&self, name: &str) -> Arc<Queue> {
        {
            let queues = self.queues.read();
            if let Some(queue) = queues.get(name) {
                return Arc::clone(queue);
            }
        }

        let mut queues = self.queues.write();
        let queue = queues.entry(name.to_string()).or_insert_with(|| {
            debug!(queue = %name, "Creating queue");
            Arc::new(Queue::new(self.time_provider.now_millis()))
        });
        Arc::clone(queue)
    }

    /// Number of queues created so far
    pub fn queue_count(&self) -> usize {
        self.queues.read().len()
    }

    fn snapshot(&self) -> Vec<(QueueName, Arc<Queue>)> {
        self.queues
            .read()
            .iter()
            .map(|(name, queue)| (name.clone(), Arc::clone(queue)))
            .collect()
    }
}

impl Default for QueueRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueStore for QueueRegistry {
    fn push(&self, queue: &str, item: Item) -> usize {
        self.get_or_create(queue).push(item)
    }

    fn pop(&self, queue: &str) -> Option<Item> {
        self.get_or_create(queue).pop()
    }

    fn pop_with_timeout(&self, queue: &str, timeout_ms: i64) -> Option<Item> {
        self.get_or_create(queue).pop_with_timeout(timeout_ms)
    }

    fn peek(&self, queue: &str) -> Option<Item> {
        self.get_or_create(queue).peek()
    }

    fn len(&self, queue: &str) -> usize {
        self.get_or_create(queue).len()
    }

    fn is_empty(&self, queue: &str) -> bool {
        self.get_or_create(queue).is_empty()
    }

    fn clear(&self, queue: &str) -> usize {
        self.get_or_create(queue).clear()
    }

    fn list_names(&self) -> Vec<QueueName> {
        self.queues.read().keys().cloned().collect()
    }

    fn stats(&self) -> Vec<QueueStats> {
        // Queue locks are taken one at a time, after the registry lock is gone
        let mut stats: Vec<QueueStats> = self
            .snapshot()
            .into_iter()
            .map(|(name, queue)| queue.stats(&name))
            .collect();
        stats.sort_by(|a, b| a.name.cmp(&b.name));
        stats
    }
}
