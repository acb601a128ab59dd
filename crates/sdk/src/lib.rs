//! Handoff SDK - Rust Client Library
//!
//! Provides a convenient client for pushing and popping items on a Handoff daemon.
//!
//! # Example
//!
//! ```no_run
//! use handoff_sdk::HandoffClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to daemon
//!     let client = HandoffClient::connect("http://127.0.0.1:9527").await?;
//!
//!     client.push("jobs", "user-42").await?;
//!
//!     // Wait up to one second for the next item
//!     if let Some(item) = client.pop_with_timeout("jobs", 1_000).await? {
//!         println!("Got {}", item);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::HandoffClient;
pub use error::{Result, SdkError, VALIDATION_ERROR};
pub use types::{
    ClearResponse, ItemResponse, ListResponse, PushResponse, QueueStats, SizeResponse,
    StatsResponse,
};
