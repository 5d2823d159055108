//! Error types for logixpress

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("Unknown order: {0}")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, Error>;
