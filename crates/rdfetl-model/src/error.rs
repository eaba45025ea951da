//! Error types for term construction and namespace configuration.

use thiserror::Error;

/// Errors raised by the model crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A prefix alias was used that the registry does not know.
    #[error("unknown namespace prefix '{0}'")]
    UnknownPrefix(String),

    /// The namespace table could not be parsed.
    #[error("invalid namespace configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
