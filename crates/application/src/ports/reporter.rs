//! Progress reporting port

use std::path::Path;

use pin_probe_domain::{RunSummary, RunnerConfig, TestResult};

use crate::error::ApplicationError;

/// Receives run progress as it happens.
///
/// Reporting never fails; adapters swallow their own output errors.
pub trait Reporter: Send + Sync {
    /// A run against `config` is starting.
    fn run_started(&self, config: &RunnerConfig);

    /// A result was appended to the log.
    fn result_recorded(&self, result: &TestResult);

    /// A check returned an error instead of a verdict.
    fn check_aborted(&self, check: &str, error: &ApplicationError);

    /// All checks have run.
    fn run_finished(&self, summary: &RunSummary);

    /// `count` results were written to `path`.
    fn results_saved(&self, path: &Path, count: usize);
}
