//! Error types for uniqueue.
//!
//! Queue operations are total; only loading a [`QueueConfig`] can fail.
//!
//! [`QueueConfig`]: crate::core::config::QueueConfig

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read queue config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse queue config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid queue config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
