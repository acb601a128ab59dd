//! Daemon configuration from environment variables

use anyhow::{Context, Result};
use handoff_api_rpc::RpcServerConfig;
use handoff_core::application::RequestLimits;
use std::str::FromStr;

pub const ENV_RPC_HOST: &str = "HANDOFF_RPC_HOST";
pub const ENV_RPC_PORT: &str = "HANDOFF_RPC_PORT";
pub const ENV_MAX_POP_TIMEOUT_MS: &str = "HANDOFF_MAX_POP_TIMEOUT_MS";
pub const ENV_MAX_ITEM_BYTES: &str = "HANDOFF_MAX_ITEM_BYTES";
pub const ENV_LOG_FORMAT: &str = "HANDOFF_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Everything the daemon reads at startup
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub rpc: RpcServerConfig,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = RpcServerConfig::default();

        let limits = RequestLimits {
            max_item_bytes: parse_or(&lookup, ENV_MAX_ITEM_BYTES, defaults.limits.max_item_bytes)?,
            max_pop_timeout_ms: parse_or(
                &lookup,
                ENV_MAX_POP_TIMEOUT_MS,
                defaults.limits.max_pop_timeout_ms,
            )?,
        };
        limits.validate()?;

        let log_format = match lookup(ENV_LOG_FORMAT) {
            None => LogFormat::Pretty,
            Some(raw) => match raw.trim() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => anyhow::bail!("Invalid value for {}: {:?}", ENV_LOG_FORMAT, raw),
            },
        };

        Ok(Self {
            rpc: RpcServerConfig {
                host: lookup(ENV_RPC_HOST).unwrap_or(defaults.host),
                port: parse_or(&lookup, ENV_RPC_PORT, defaults.port)?,
                limits,
            },
            log_format,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
