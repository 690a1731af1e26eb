//! In-memory port implementations for unit tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use pin_probe_domain::{
    DeviceRequest, DeviceResponse, HttpMethod, ResultLog, RunSummary, RunnerConfig, TestResult,
};

use crate::checks::{Check, CheckContext};
use crate::error::ApplicationError;
use crate::ports::{Clock, HttpClient, HttpClientError, Reporter};

pub const TEST_HOST: &str = "device.test";

pub fn test_config() -> RunnerConfig {
    RunnerConfig::new(TEST_HOST, Duration::from_secs(10))
        .unwrap()
        .with_check_pause(Duration::ZERO)
}

/// Canned responses keyed by method and path. Unknown routes are refused.
#[derive(Default)]
pub struct MockHttpClient {
    routes: HashMap<(HttpMethod, String), Result<DeviceResponse, HttpClientError>>,
    requests: Arc<Mutex<Vec<DeviceRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: HttpMethod, path: &str, status: u16, body: &str) -> Self {
        let response = DeviceResponse::new(status, body.as_bytes().to_vec(), Duration::from_millis(5));
        self.routes.insert((method, path.to_string()), Ok(response));
        self
    }

    pub fn fail(mut self, method: HttpMethod, path: &str, error: HttpClientError) -> Self {
        self.routes.insert((method, path.to_string()), Err(error));
        self
    }

    /// Handle on every request sent so far.
    pub fn requests(&self) -> Arc<Mutex<Vec<DeviceRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: &DeviceRequest) -> Result<DeviceResponse, HttpClientError> {
        self.requests.lock().expect("Lock poisoned").push(request.clone());
        let path = request
            .url
            .strip_prefix(&format!("http://{TEST_HOST}"))
            .unwrap_or(&request.url)
            .to_string();
        self.routes
            .get(&(request.method, path))
            .cloned()
            .unwrap_or_else(|| {
                Err(HttpClientError::ConnectionRefused {
                    host: TEST_HOST.to_string(),
                    port: 80,
                })
            })
    }
}

pub struct FixedClock;

impl FixedClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// Remembers every report as a short tagged line.
#[derive(Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("Lock poisoned").clone()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.starts_with("result:"))
            .collect()
    }

    fn push(&self, event: String) {
        self.events.lock().expect("Lock poisoned").push(event);
    }
}

impl Reporter for CollectingReporter {
    fn run_started(&self, config: &RunnerConfig) {
        self.push(format!("start:{}", config.target()));
    }

    fn result_recorded(&self, result: &TestResult) {
        self.push(format!("result:{}:{}", result.name, result.success));
    }

    fn check_aborted(&self, check: &str, error: &ApplicationError) {
        self.push(format!("aborted:{check}:{error}"));
    }

    fn run_finished(&self, summary: &RunSummary) {
        self.push(format!("finish:{summary}"));
    }

    fn results_saved(&self, path: &Path, count: usize) {
        self.push(format!("saved:{}:{count}", path.display()));
    }
}

/// Runs one check against `http` and returns its verdict and log.
pub async fn run_single(check: &dyn Check, http: MockHttpClient) -> (bool, ResultLog) {
    let config = test_config();
    let reporter = CollectingReporter::default();
    let mut log = ResultLog::new();
    let mut ctx = CheckContext::new(&config, &http, &FixedClock, &reporter, &mut log);
    let passed = check.run(&mut ctx).await.unwrap();
    (passed, log)
}
