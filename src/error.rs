//! Error types for gati-ctrl.

use thiserror::Error;

/// Controller error type.
#[derive(Error, Debug)]
pub enum GatiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown critic: {0}")]
    UnknownCritic(String),

    #[error("Unknown motion model: {0}")]
    UnknownMotionModel(String),

    #[error("Received an empty path")]
    EmptyPath,
}

impl From<toml::de::Error> for GatiError {
    fn from(e: toml::de::Error) -> Self {
        GatiError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatiError>;
