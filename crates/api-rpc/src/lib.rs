//! JSON-RPC API Layer
//!
//! Exposes the named queues as a JSON-RPC 2.0 server for out-of-process workers.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
