//! Error type for the fallible edges of the bridge.
//!
//! Routing itself never fails: absence (unknown device, no capabilities) is
//! ordinary control flow. Errors only come from configuration loading, device
//! dumps, and the cross-thread command plumbing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("command queue is full")]
    QueueFull,

    #[error("channel disconnected")]
    Disconnected,

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("request cancelled by responder")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
