//! Error types for the demo binary.

use shopfront_core::CoreError;

use crate::config::ConfigError;

/// Everything a demo run can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error(transparent)]
    Store(#[from] CoreError),

    #[error("Could not encode receipt: {0}")]
    Encode(#[from] serde_json::Error),
}
