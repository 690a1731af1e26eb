//! Application error types

use pin_probe_domain::DomainError;
use thiserror::Error;

use crate::ports::{HttpClientError, ResultStoreError};

/// Application-level errors.
///
/// Device misbehaviour never surfaces here; it is recorded as a failing
/// result. These errors mean the harness itself could not do its job.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A request could not be built or sent.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// A request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Results could not be persisted.
    #[error("storage error: {0}")]
    Storage(#[from] ResultStoreError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
