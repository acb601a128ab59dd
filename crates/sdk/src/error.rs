//! SDK Error Types

use jsonrpsee::core::ClientError;
use thiserror::Error;

/// Code the daemon uses when it refuses a request outright (e.g. item too large)
pub const VALIDATION_ERROR: i32 = 4000;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Failures a Handoff call can surface
#[derive(Debug, Error)]
pub enum SdkError {
    /// The endpoint URL could not be turned into an HTTP client
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Daemon unreachable, or the connection dropped mid-request
    #[error("Daemon unreachable: {0}")]
    Unreachable(String),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    /// Params or response body did not match the wire format
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// No response within the client's request timeout
    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected client error: {0}")]
    Unexpected(String),
}

impl SdkError {
    /// The daemon refused this exact request; resending it will fail again
    pub fn is_rejected(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == VALIDATION_ERROR)
    }

    /// Worth retrying after a pause
    pub fn is_transient(&self) -> bool {
        matches!(self, SdkError::Unreachable(_) | SdkError::Timeout)
    }
}

impl From<ClientError> for SdkError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Call(call) => SdkError::Rpc {
                code: call.code(),
                message: call.message().to_string(),
            },
            ClientError::Transport(e) => SdkError::Unreachable(e.to_string()),
            ClientError::RequestTimeout => SdkError::Timeout,
            ClientError::ParseError(e) => SdkError::Payload(e),
            other => SdkError::Unexpected(other.to_string()),
        }
    }
}
