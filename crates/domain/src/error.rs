//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building harness configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The target device address cannot be turned into a base URL.
    #[error("invalid target address '{target}': {reason}")]
    InvalidTarget {
        /// Address as given by the user.
        target: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timeout of zero was requested.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    /// An endpoint path is not absolute.
    #[error("invalid endpoint path: {0}")]
    InvalidEndpoint(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
