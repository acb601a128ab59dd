//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.
//! An absent item is `null`, so an empty-string item stays distinguishable.

use handoff_core::domain::QueueStats;
use serde::{Deserialize, Serialize};

/// queue.push.v1 - Append an item
#[derive(Debug, Deserialize)]
pub struct PushRequest {
    pub queue: String,
    pub item: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PushResponse {
    pub queue: String,
    pub length: usize,
}

/// queue.pop.v1 - Take the front item, optionally waiting for one
#[derive(Debug, Deserialize)]
pub struct PopRequest {
    pub queue: String,
    /// 0 (default) or negative pops without waiting
    #[serde(default)]
    pub timeout_ms: i64,
}

/// queue.pop.v1 / queue.peek.v1 result
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub queue: String,
    pub item: Option<String>,
}

/// queue.peek.v1, queue.size.v1, queue.clear.v1
#[derive(Debug, Deserialize)]
pub struct QueueRequest {
    pub queue: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeResponse {
    pub queue: String,
    pub length: usize,
    pub is_empty: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub queue: String,
    pub cleared: usize,
}

/// queue.list.v1 - Known queue names (unordered)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub queues: Vec<String>,
}

/// admin.stats.v1 - Per-queue counters
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub queues: Vec<QueueStats>,
    pub uptime_seconds: i64,
}
