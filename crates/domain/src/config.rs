//! Runner configuration
//!
//! The resolved, validated settings a test run uses. Built once from user
//! input and read-only afterwards.

use std::time::Duration;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Address the Pin device answers on in access-point mode.
pub const DEFAULT_TARGET: &str = "192.168.4.1";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout used for the WiFi scan; scanning blocks the device radio for a while.
pub const WIFI_SCAN_TIMEOUT: Duration = Duration::from_secs(30);

/// Default pause between two consecutive checks.
pub const DEFAULT_CHECK_PAUSE: Duration = Duration::from_secs(1);

/// Configuration for a test run against one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    target: String,
    base_url: Url,
    request_timeout: Duration,
    scan_timeout: Duration,
    check_pause: Duration,
}

impl RunnerConfig {
    /// Creates a configuration for `target` with the given request timeout.
    ///
    /// A bare host or `host:port` is addressed over plain HTTP; an explicit
    /// `http://` or `https://` prefix is kept as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a valid host or the timeout is zero.
    pub fn new(target: impl Into<String>, request_timeout: Duration) -> DomainResult<Self> {
        let target = target.into();
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTarget {
                target,
                reason: "address is empty".to_string(),
            });
        }
        if request_timeout.is_zero() {
            return Err(DomainError::ZeroTimeout);
        }

        let raw = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
        let base_url = Url::parse(&raw).map_err(|e| DomainError::InvalidTarget {
            target: target.clone(),
            reason: e.to_string(),
        })?;
        if base_url.host_str().is_none() {
            return Err(DomainError::InvalidTarget {
                target,
                reason: "address has no host".to_string(),
            });
        }

        Ok(Self {
            target: trimmed.to_string(),
            base_url,
            request_timeout,
            scan_timeout: WIFI_SCAN_TIMEOUT,
            check_pause: DEFAULT_CHECK_PAUSE,
        })
    }

    /// Sets the pause between checks. Zero disables it.
    #[must_use]
    pub const fn with_check_pause(mut self, pause: Duration) -> Self {
        self.check_pause = pause;
        self
    }

    /// The address as the user gave it.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Timeout for the WiFi scan request.
    #[must_use]
    pub const fn scan_timeout(&self) -> Duration {
        self.scan_timeout
    }

    /// Pause inserted between consecutive checks.
    #[must_use]
    pub const fn check_pause(&self) -> Duration {
        self.check_pause
    }

    /// Resolves an absolute endpoint path such as `/api/status`.
    ///
    /// The path is appended to any path the base URL already has, so a device
    /// served under `http://host/pin` is asked for `http://host/pin/api/status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not start with `/`.
    pub fn endpoint(&self, path: &str) -> DomainResult<String> {
        if !path.starts_with('/') {
            return Err(DomainError::InvalidEndpoint(format!(
                "{path}: must start with '/'"
            )));
        }
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{path}"));
        Ok(url.into())
    }
}
