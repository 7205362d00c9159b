//! Crate-level error type.

use crate::{analysis::AnalysisError, capture::LogError, config::ConfigError, metrics::MetricsError};
use thiserror::Error;

/// Any failure surfaced by the library's entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a timestamp log failed.
    #[error(transparent)]
    Log(#[from] LogError),

    /// Analysis of a recording failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The configuration is unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Metrics registration or encoding failed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// JSON serialization failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
