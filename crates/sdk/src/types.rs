//! SDK Response Types
//!
//! Mirrors the JSON-RPC results from the api-rpc crate.

use serde::Deserialize;

/// Result of queue.push.v1
#[derive(Debug, Clone, Deserialize)]
pub struct PushResponse {
    pub queue: String,
    pub length: usize,
}

/// Result of queue.pop.v1 and queue.peek.v1 (`None` when the queue was empty)
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse {
    pub queue: String,
    pub item: Option<String>,
}

/// Result of queue.size.v1
#[derive(Debug, Clone, Deserialize)]
pub struct SizeResponse {
    pub queue: String,
    pub length: usize,
    pub is_empty: bool,
}

/// Result of queue.clear.v1
#[derive(Debug, Clone, Deserialize)]
pub struct ClearResponse {
    pub queue: String,
    pub cleared: usize,
}

/// Result of queue.list.v1
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub queues: Vec<String>,
}

/// One queue in admin.stats.v1
#[derive(Debug, Clone, Deserialize)]
pub struct QueueStats {
    pub name: String,
    pub length: usize,
    pub waiters: usize,
    pub pushed_total: u64,
    pub popped_total: u64,
    pub created_at_ms: i64,
}

/// Result of admin.stats.v1
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub queues: Vec<QueueStats>,
    pub uptime_seconds: i64,
}
