// Request Limits - host-facing guards in front of the queues
//
// The queues accept anything; remote callers go through these first.

use crate::application::constants::{DEFAULT_MAX_ITEM_BYTES, DEFAULT_MAX_POP_TIMEOUT_MS};
use crate::error::{AppError, Result};

/// Limits applied to requests arriving over a host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_item_bytes: usize,
    pub max_pop_timeout_ms: i64,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_item_bytes: DEFAULT_MAX_ITEM_BYTES,
            max_pop_timeout_ms: DEFAULT_MAX_POP_TIMEOUT_MS,
        }
    }
}

impl RequestLimits {
    /// Reject nonsensical limit values at startup
    pub fn validate(&self) -> Result<()> {
        if self.max_item_bytes == 0 {
            return Err(AppError::Config(
                "max_item_bytes must be greater than zero".to_string(),
            ));
        }
        if self.max_pop_timeout_ms <= 0 {
            return Err(AppError::Config(format!(
                "max_pop_timeout_ms must be positive (got {})",
                self.max_pop_timeout_ms
            )));
        }
        Ok(())
    }

    /// Check a pushed item against the size limit
    pub fn check_item(&self, item: &str) -> Result<()> {
        if item.len() > self.max_item_bytes {
            return Err(AppError::Validation(format!(
                "Item too large: {} bytes (max {})",
                item.len(),
                self.max_item_bytes
            )));
        }
        Ok(())
    }

    /// Bound a requested blocking pop; non-positive values pass through as "don't wait"
    pub fn clamp_timeout(&self, timeout_ms: i64) -> i64 {
        timeout_ms.min(self.max_pop_timeout_ms)
    }
}

#[cfg(test)]
#[path = "limits_test.rs"]
mod limits_test;
