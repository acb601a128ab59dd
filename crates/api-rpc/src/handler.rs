//! RPC Method Handlers
//!
//! Translates each JSON-RPC method into calls on the queue store.

use crate::error::to_rpc_error;
use crate::types::{
    ClearResponse, ItemResponse, ListResponse, PopRequest, PushRequest, PushResponse,
    QueueRequest, SizeResponse, StatsResponse,
};
use handoff_core::application::RequestLimits;
use handoff_core::error::AppError;
use handoff_core::port::QueueStore;
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tracing::debug;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    store: Arc<dyn QueueStore>,
    limits: RequestLimits,
    start_time: std::time::Instant,
}

impl RpcHandler {
    pub fn new(store: Arc<dyn QueueStore>, limits: RequestLimits) -> Self {
        Self {
            store,
            limits,
            start_time: std::time::Instant::now(),
        }
    }

    /// queue.push.v1
    pub async fn push(&self, params: PushRequest) -> Result<PushResponse, ErrorObjectOwned> {
        self.limits
            .check_item(&params.item)
            .map_err(to_rpc_error)?;

        let length = self.store.push(&params.queue, params.item);

        Ok(PushResponse {
            queue: params.queue,
            length,
        })
    }

    /// queue.pop.v1
    ///
    /// A positive timeout parks a blocking-pool thread, never an async worker.
    pub async fn pop(&self, params: PopRequest) -> Result<ItemResponse, ErrorObjectOwned> {
        let timeout_ms = self.limits.clamp_timeout(params.timeout_ms);

        let item = if timeout_ms <= 0 {
            self.store.pop(&params.queue)
        } else {
            debug!(queue = %params.queue, timeout_ms, "Blocking pop");
            let store = Arc::clone(&self.store);
            let queue = params.queue.clone();
            tokio::task::spawn_blocking(move || store.pop_with_timeout(&queue, timeout_ms))
                .await
                .map_err(|e| {
                    to_rpc_error(AppError::Internal(format!("Blocking pop failed: {}", e)))
                })?
        };

        Ok(ItemResponse {
            queue: params.queue,
            item,
        })
    }

    /// queue.peek.v1
    pub async fn peek(&self, params: QueueRequest) -> Result<ItemResponse, ErrorObjectOwned> {
        let item = self.store.peek(&params.queue);
        Ok(ItemResponse {
            queue: params.queue,
            item,
        })
    }

    /// queue.size.v1
    pub async fn size(&self, params: QueueRequest) -> Result<SizeResponse, ErrorObjectOwned> {
        let length = self.store.len(&params.queue);
        Ok(SizeResponse {
            queue: params.queue,
            length,
            is_empty: length == 0,
        })
    }

    /// queue.clear.v1
    pub async fn clear(&self, params: QueueRequest) -> Result<ClearResponse, ErrorObjectOwned> {
        let cleared = self.store.clear(&params.queue);
        debug!(queue = %params.queue, cleared, "Queue cleared");
        Ok(ClearResponse {
            queue: params.queue,
            cleared,
        })
    }

    /// queue.list.v1
    pub async fn list(&self) -> Result<ListResponse, ErrorObjectOwned> {
        Ok(ListResponse {
            queues: self.store.list_names(),
        })
    }

    /// admin.stats.v1
    pub async fn stats(&self) -> Result<StatsResponse, ErrorObjectOwned> {
        Ok(StatsResponse {
            queues: self.store.stats(),
            uptime_seconds: self.start_time.elapsed().as_secs() as i64,
        })
    }
}
