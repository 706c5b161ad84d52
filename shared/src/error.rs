//! Error types for the smart home skill Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a smart home directive.
#[derive(Error, Debug)]
pub enum Error {
    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Entity store could not be read
    #[error("Entity store unavailable: {0}")]
    StoreUnavailable(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// A value had an unexpected type
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A stored item could not be decoded
    #[error("Item decode error: {0}")]
    Decode(#[from] serde_dynamo::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the failure came from a downstream collaborator rather than our own code.
    pub fn is_downstream(&self) -> bool {
        matches!(
            self,
            Error::Aws(_) | Error::StoreUnavailable(_) | Error::NotFound(_) | Error::TypeMismatch(_)
        )
    }
}
