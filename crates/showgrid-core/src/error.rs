//! Error types for showgrid-core.

use thiserror::Error;

/// Configuration problems detected before any data is loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No reviews endpoint in the flags, the environment, or the config file.
    #[error("missing reviews endpoint: set REVIEWS_ENDPOINT, pass --endpoint, or add [source] endpoint to {path}")]
    MissingEndpoint { path: String },
}
