//! NEF Core - Shared error and configuration types
//!
//! This crate holds the pieces every other NEF crate depends on:
//! - The common error type (`NefError`) and `Result` alias
//! - Configuration management (`AppConfig`)

pub mod config;

pub use config::{AppConfig, ConfigError, LoggingConfig, ModelConfig, ServerConfig};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for NEF operations
#[derive(Error, Debug)]
pub enum NefError {
    /// The NLP model collaborator failed to analyze the text
    #[error("Model error: {0}")]
    Model(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for NefError {
    fn from(err: ConfigError) -> Self {
        NefError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NefError>;
