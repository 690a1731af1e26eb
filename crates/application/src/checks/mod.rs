//! Device checks
//!
//! A check performs one interaction with the device, validates the reply and
//! records at least one result through its `CheckContext`. The returned
//! boolean reflects the check's primary assertion only.

mod connectivity;
mod manifest;
mod plugins;
mod settings;
mod status;
mod wifi_scan;

use std::time::Duration;

use async_trait::async_trait;
use pin_probe_domain::validation::ValidationError;
use pin_probe_domain::{DeviceRequest, DeviceResponse, ResultLog, RunnerConfig, TestResult};
use serde_json::Value;

use crate::error::ApplicationResult;
use crate::ports::{Clock, HttpClient, Reporter};

pub use connectivity::ConnectivityCheck;
pub use manifest::ManifestCheck;
pub use plugins::PluginListCheck;
pub use settings::SettingsCheck;
pub use status::StatusCheck;
pub use wifi_scan::WifiScanCheck;

/// One named, self-contained device check.
#[async_trait]
pub trait Check: Send + Sync {
    /// Display name, also used as the name of the primary result.
    fn name(&self) -> &'static str;

    /// Runs the check.
    ///
    /// Device and transport failures are recorded and yield `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the harness itself cannot carry out the
    /// check, e.g. a request that cannot be constructed.
    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool>;
}

/// The six device checks in run order.
#[must_use]
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ConnectivityCheck),
        Box::new(ManifestCheck),
        Box::new(StatusCheck),
        Box::new(WifiScanCheck),
        Box::new(PluginListCheck),
        Box::new(SettingsCheck),
    ]
}

/// What a check can see and do while it runs.
pub struct CheckContext<'a> {
    config: &'a RunnerConfig,
    http: &'a dyn HttpClient,
    clock: &'a dyn Clock,
    reporter: &'a dyn Reporter,
    log: &'a mut ResultLog,
}

impl<'a> CheckContext<'a> {
    /// Creates a context recording into `log`.
    pub fn new(
        config: &'a RunnerConfig,
        http: &'a dyn HttpClient,
        clock: &'a dyn Clock,
        reporter: &'a dyn Reporter,
        log: &'a mut ResultLog,
    ) -> Self {
        Self {
            config,
            http,
            clock,
            reporter,
            log,
        }
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        self.config
    }

    /// Appends a result stamped with the current time and reports it.
    pub fn record(&mut self, name: &str, success: bool, message: impl Into<String>) {
        let result = TestResult::new(name, success, message, self.clock.now());
        tracing::debug!(test = %result.name, success, message = %result.message, "Recorded result");
        self.reporter.result_recorded(&result);
        self.log.push(result);
    }

    /// Records a passing result.
    pub fn pass(&mut self, name: &str, message: impl Into<String>) {
        self.record(name, true, message);
    }

    /// Records a failing result.
    pub fn fail(&mut self, name: &str, message: impl Into<String>) {
        self.record(name, false, message);
    }

    /// Builds a GET for `path` with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved against the base URL.
    pub fn get(&self, path: &str) -> ApplicationResult<DeviceRequest> {
        self.get_with_timeout(path, self.config.request_timeout())
    }

    /// Builds a GET for `path` with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved against the base URL.
    pub fn get_with_timeout(&self, path: &str, timeout: Duration) -> ApplicationResult<DeviceRequest> {
        Ok(DeviceRequest::get(self.config.endpoint(path)?, timeout))
    }

    /// Builds a JSON POST for `path` with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved against the base URL.
    pub fn post_json(&self, path: &str, body: Value) -> ApplicationResult<DeviceRequest> {
        Ok(DeviceRequest::post_json(
            self.config.endpoint(path)?,
            body,
            self.config.request_timeout(),
        ))
    }

    /// Sends `request` and returns the response only if it is `200 OK`.
    ///
    /// Otherwise records one failing result under `name` and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be constructed.
    pub async fn fetch(
        &mut self,
        name: &str,
        request: &DeviceRequest,
    ) -> ApplicationResult<Option<DeviceResponse>> {
        self.fetch_labeled(request, name, name).await
    }

    /// Like [`fetch`](Self::fetch), but records status failures under
    /// `status_label` and transport faults under `fault_label`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be constructed.
    pub async fn fetch_labeled(
        &mut self,
        request: &DeviceRequest,
        status_label: &str,
        fault_label: &str,
    ) -> ApplicationResult<Option<DeviceResponse>> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            timeout_ms = millis(request.timeout),
            "Sending request"
        );
        match self.http.execute(request).await {
            Ok(response) => {
                tracing::debug!(
                    url = %request.url,
                    status = response.status.as_u16(),
                    elapsed_ms = millis(response.duration),
                    "Received response"
                );
                if response.is_ok() {
                    Ok(Some(response))
                } else {
                    self.fail(status_label, format!("HTTP {}", response.status));
                    Ok(None)
                }
            }
            Err(error) if error.is_request_construction() => Err(error.into()),
            Err(error) => {
                tracing::warn!(url = %request.url, %error, "Request failed");
                self.fail(fault_label, error.to_string());
                Ok(None)
            }
        }
    }

    /// Fetches `request` and decodes the body as JSON.
    ///
    /// Any failure is recorded under `name` and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be constructed.
    pub async fn fetch_json(
        &mut self,
        name: &str,
        request: &DeviceRequest,
    ) -> ApplicationResult<Option<Value>> {
        match self.fetch(name, request).await? {
            Some(response) => Ok(self.decode_json(name, &response)),
            None => Ok(None),
        }
    }

    /// Decodes a response body as JSON, recording a failure under `name` if it is not.
    pub fn decode_json(&mut self, name: &str, response: &DeviceResponse) -> Option<Value> {
        match response.json() {
            Ok(value) => Some(value),
            Err(error) => {
                self.fail(name, format!("Invalid JSON response: {error}"));
                None
            }
        }
    }

    /// Records a failure under `name` if `validation` failed; returns whether it passed.
    pub fn require(&mut self, name: &str, validation: Result<(), ValidationError>) -> bool {
        match validation {
            Ok(()) => true,
            Err(error) => {
                self.fail(name, error.to_string());
                false
            }
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Renders a JSON scalar for a message: strings without quotes, the rest as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CollectingReporter, FixedClock, MockHttpClient, test_config};
    use pin_probe_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_check_order() {
        let names: Vec<_> = default_checks().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Device Connectivity",
                "PWA Manifest",
                "API Status",
                "WiFi Scan",
                "Plugin List",
                "Settings API",
            ]
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&serde_json::json!("1.0.0")), "1.0.0");
        assert_eq!(display_value(&serde_json::json!(85)), "85");
        assert_eq!(display_value(&serde_json::json!(null)), "null");
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_relative_path_is_construction_error() {
        let config = test_config();
        let http = MockHttpClient::new();
        let reporter = CollectingReporter::default();
        let mut log = ResultLog::new();
        let ctx = CheckContext::new(&config, &http, &FixedClock, &reporter, &mut log);

        assert!(ctx.get("api/status").is_err());
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_records_status_failure() {
        let config = test_config();
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/status", 500, "{}");
        let reporter = CollectingReporter::default();
        let mut log = ResultLog::new();
        let mut ctx = CheckContext::new(&config, &http, &FixedClock, &reporter, &mut log);

        let request = ctx.get("/api/status").unwrap();
        let response = ctx.fetch("API Status", &request).await.unwrap();

        assert!(response.is_none());
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].message, "HTTP 500 Internal Server Error");
        assert_eq!(reporter.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_propagates_construction_errors() {
        let config = test_config();
        let http = MockHttpClient::new().fail(
            HttpMethod::Get,
            "/",
            crate::ports::HttpClientError::InvalidUrl("nope".to_string()),
        );
        let reporter = CollectingReporter::default();
        let mut log = ResultLog::new();
        let mut ctx = CheckContext::new(&config, &http, &FixedClock, &reporter, &mut log);

        let request = ctx.get("/").unwrap();
        let result = ctx.fetch("Device Connectivity", &request).await;

        assert!(result.is_err());
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_json_records_parse_failure() {
        let config = test_config();
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/manifest.json", 200, "<html>");
        let reporter = CollectingReporter::default();
        let mut log = ResultLog::new();
        let mut ctx = CheckContext::new(&config, &http, &FixedClock, &reporter, &mut log);

        let request = ctx.get("/manifest.json").unwrap();
        let body = ctx.fetch_json("PWA Manifest", &request).await.unwrap();

        assert!(body.is_none());
        assert_eq!(log.len(), 1);
        assert!(log.as_slice()[0].message.starts_with("Invalid JSON response"));
    }
}
