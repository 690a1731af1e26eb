//! Device test runner
//!
//! Runs an ordered list of checks against one device, one after another,
//! collecting every recorded result into a log the runner owns.

use std::path::Path;
use std::sync::Arc;

use pin_probe_domain::{ResultLog, RunSummary, RunnerConfig};

use crate::checks::{Check, CheckContext, default_checks};
use crate::error::ApplicationResult;
use crate::ports::{Clock, HttpClient, Reporter, ResultStore};

/// Sequential runner for device checks.
pub struct DeviceTestRunner {
    config: RunnerConfig,
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
    reporter: Arc<dyn Reporter>,
    checks: Vec<Box<dyn Check>>,
    log: ResultLog,
}

impl DeviceTestRunner {
    /// Creates a runner with the default check list and an empty log.
    pub fn new(
        config: RunnerConfig,
        http: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            http,
            clock,
            reporter,
            checks: default_checks(),
            log: ResultLog::new(),
        }
    }

    /// Replaces the check list.
    #[must_use]
    pub fn with_checks(mut self, checks: Vec<Box<dyn Check>>) -> Self {
        self.checks = checks;
        self
    }

    /// Appends a check to the end of the list.
    pub fn push_check(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Names of the checks in run order.
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Everything recorded so far.
    #[must_use]
    pub const fn results(&self) -> &ResultLog {
        &self.log
    }

    /// Consumes the runner, returning its log.
    #[must_use]
    pub fn into_results(self) -> ResultLog {
        self.log
    }

    /// Appends a result stamped with the current time and reports it.
    pub fn record(&mut self, name: &str, success: bool, message: impl Into<String>) {
        self.context().record(name, success, message);
    }

    fn context(&mut self) -> CheckContext<'_> {
        CheckContext::new(
            &self.config,
            self.http.as_ref(),
            self.clock.as_ref(),
            self.reporter.as_ref(),
            &mut self.log,
        )
    }

    /// Runs one check, recording into this runner's log.
    ///
    /// # Errors
    ///
    /// Propagates an error the check could not handle itself.
    pub async fn run_check(&mut self, check: &dyn Check) -> ApplicationResult<bool> {
        let mut ctx = self.context();
        check.run(&mut ctx).await
    }

    /// Runs every check in order, pausing between consecutive checks.
    ///
    /// A check that errors is reported, counted as failed, and the run
    /// continues with the next check.
    pub async fn run_all(&mut self) -> RunSummary {
        let checks = std::mem::take(&mut self.checks);
        let total = checks.len();
        let pause = self.config.check_pause();
        let mut passed = 0;

        tracing::info!(target_url = %self.config.base_url(), checks = total, "Starting device test run");
        self.reporter.run_started(&self.config);

        for (index, check) in checks.iter().enumerate() {
            match self.run_check(check.as_ref()).await {
                Ok(true) => passed += 1,
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!(check = check.name(), %error, "Check aborted");
                    self.reporter.check_aborted(check.name(), &error);
                }
            }

            if index + 1 < total && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
        self.checks = checks;

        let summary = RunSummary::new(passed, total);
        tracing::info!(%summary, recorded = self.log.len(), "Device test run finished");
        self.reporter.run_finished(&summary);
        summary
    }

    /// Writes the entire log to `path` through `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot write the file.
    pub async fn save_results(&self, store: &dyn ResultStore, path: &Path) -> ApplicationResult<()> {
        store.save(path, &self.log).await?;
        tracing::info!(path = %path.display(), count = self.log.len(), "Saved test results");
        self.reporter.results_saved(path, self.log.len());
        Ok(())
    }
}
