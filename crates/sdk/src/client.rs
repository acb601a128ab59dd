//! Handoff Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    ClearResponse, ItemResponse, ListResponse, PushResponse, SizeResponse, StatsResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;
use tracing::warn;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headroom left between a blocking pop and the HTTP request carrying it
const POP_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

/// Handoff daemon client
///
/// # Example
///
/// ```no_run
/// use handoff_sdk::HandoffClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HandoffClient::connect("http://127.0.0.1:9527").await?;
/// # Ok(())
/// # }
/// ```
pub struct HandoffClient {
    client: HttpClient,
    request_timeout: Duration,
}

impl HandoffClient {
    /// Connect to a Handoff daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9527`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_timeout(url, DEFAULT_REQUEST_TIMEOUT).await
    }

    /// Connect with a custom HTTP request timeout
    ///
    /// Blocking pops are shortened to one second less than this timeout so
    /// they always finish inside it. A timeout of one second or less leaves
    /// no room to wait, and every `pop_with_timeout` becomes a plain `pop`.
    pub async fn connect_with_timeout(
        url: impl AsRef<str>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(url)
            .map_err(|e| SdkError::InvalidEndpoint {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            request_timeout,
        })
    }

    /// Push an item onto a queue, creating the queue if needed
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use handoff_sdk::HandoffClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = HandoffClient::connect("http://127.0.0.1:9527").await?;
    /// let response = client.push("jobs", "user-42").await?;
    /// println!("jobs now holds {} items", response.length);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn push(
        &self,
        queue: impl Into<String>,
        item: impl Into<String>,
    ) -> Result<PushResponse> {
        let mut params = ObjectParams::new();
        params.insert("queue", queue.into())?;
        params.insert("item", item.into())?;

        let response: PushResponse = self.client.request("queue.push.v1", params).await?;
        Ok(response)
    }

    /// Pop the front item without waiting
    pub async fn pop(&self, queue: impl Into<String>) -> Result<Option<String>> {
        self.pop_with_timeout(queue, 0).await
    }

    /// Pop the front item, waiting up to `timeout_ms` for one to arrive
    ///
    /// Returns `Ok(None)` when nothing arrived in time. The wait is capped
    /// just below the client's request timeout (and by the server's own limit).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use handoff_sdk::HandoffClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = HandoffClient::connect("http://127.0.0.1:9527").await?;
    /// match client.pop_with_timeout("jobs", 5_000).await? {
    ///     Some(item) => println!("Got {}", item),
    ///     None => println!("Nothing within 5s"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pop_with_timeout(
        &self,
        queue: impl Into<String>,
        timeout_ms: i64,
    ) -> Result<Option<String>> {
        let mut params = ObjectParams::new();
        params.insert("queue", queue.into())?;
        params.insert("timeout_ms", self.capped_pop_timeout(timeout_ms))?;

        let response: ItemResponse = self.client.request("queue.pop.v1", params).await?;
        Ok(response.item)
    }

    /// Front item without removing it
    pub async fn peek(&self, queue: impl Into<String>) -> Result<Option<String>> {
        let response: ItemResponse = self
            .client
            .request("queue.peek.v1", queue_params(queue)?)
            .await?;
        Ok(response.item)
    }

    /// Number of items in a queue
    pub async fn size(&self, queue: impl Into<String>) -> Result<usize> {
        let response: SizeResponse = self
            .client
            .request("queue.size.v1", queue_params(queue)?)
            .await?;
        Ok(response.length)
    }

    pub async fn is_empty(&self, queue: impl Into<String>) -> Result<bool> {
        let response: SizeResponse = self
            .client
            .request("queue.size.v1", queue_params(queue)?)
            .await?;
        Ok(response.is_empty)
    }

    /// Drop every item in a queue, returning how many were discarded
    pub async fn clear(&self, queue: impl Into<String>) -> Result<usize> {
        let response: ClearResponse = self
            .client
            .request("queue.clear.v1", queue_params(queue)?)
            .await?;
        Ok(response.cleared)
    }

    /// Names of every queue the daemon knows about (unordered)
    pub async fn list_queues(&self) -> Result<Vec<String>> {
        let response: ListResponse = self.client.request("queue.list.v1", rpc_params![]).await?;
        Ok(response.queues)
    }

    /// Per-queue counters and daemon uptime
    pub async fn stats(&self) -> Result<StatsResponse> {
        let response: StatsResponse = self.client.request("admin.stats.v1", rpc_params![]).await?;
        Ok(response)
    }

    fn capped_pop_timeout(&self, timeout_ms: i64) -> i64 {
        let max = self.max_pop_timeout_ms();
        if timeout_ms > max {
            warn!(
                requested_ms = timeout_ms,
                capped_ms = max,
                request_timeout_ms = self.request_timeout.as_millis() as u64,
                "Blocking pop shortened to fit the request timeout"
            );
            return max;
        }
        timeout_ms
    }

    fn max_pop_timeout_ms(&self) -> i64 {
        self.request_timeout
            .saturating_sub(POP_TIMEOUT_MARGIN)
            .as_millis()
            .try_into()
            .unwrap_or(i64::MAX)
    }
}

fn queue_params(queue: impl Into<String>) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    params.insert("queue", queue.into())?;
    Ok(params)
}
