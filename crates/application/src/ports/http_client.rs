//! HTTP client port
//!
//! Defines how the runner talks to the device under test.

use async_trait::async_trait;
use pin_probe_domain::{DeviceRequest, DeviceResponse};

/// Errors an HTTP adapter can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No complete response within the timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The device actively refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
        /// Port that refused.
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// Any other connection-level failure.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The connection dropped while reading the body.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Anything else the adapter reports.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Whether the request never left the harness because it was malformed.
    ///
    /// These are harness faults rather than device or network faults.
    #[must_use]
    pub const fn is_request_construction(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }
}

/// Port for sending requests to the device.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the full response.
    ///
    /// A non-2xx status is a successful exchange, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    async fn execute(&self, request: &DeviceRequest) -> Result<DeviceResponse, HttpClientError>;
}
