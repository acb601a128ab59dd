// Queue Domain Model

use serde::{Deserialize, Serialize};

/// Queue identifier
pub type QueueName = String;

/// Opaque work item handed from producers to consumers
pub type Item = String;

/// Point-in-time view of a single queue (admin.stats.v1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub name: QueueName,
    pub length: usize,
    /// Callers currently parked in a blocking pop
    pub waiters: usize,
    pub pushed_total: u64,
    pub popped_total: u64,
    pub created_at_ms: i64,
}
