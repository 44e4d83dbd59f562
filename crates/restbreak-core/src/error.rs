//! Core error types for restbreak-core.
//!
//! This module defines the error hierarchy using thiserror. Engine
//! rejections are programmer errors surfaced as typed values; they are
//! always returned before any metric is touched.

use std::path::PathBuf;
use thiserror::Error;

use crate::stats::{MetricId, MetricKind};

/// Core error type for restbreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Statistics engine rejections
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mutations the statistics engine refuses to perform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A value of the wrong kind was offered to a metric slot.
    #[error("{metric:?} holds {expected:?} values, got {found:?}")]
    KindMismatch {
        metric: MetricId,
        expected: MetricKind,
        found: MetricKind,
    },

    /// `increase` on a metric that is not a count or a duration.
    #[error("{metric:?} is a {kind:?} metric and cannot be increased")]
    NotAccumulative { metric: MetricId, kind: MetricKind },

    /// An idle run longer than the driver accepts in one event.
    #[error("idle run of {secs}s exceeds the {max}s limit")]
    IdleRunTooLong { secs: u64, max: u64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to locate or create the configuration directory
    #[error("Cannot prepare configuration directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
