//! Console reporter
//!
//! Prints one line per recorded result plus a banner and a summary. This is
//! the harness's product output; diagnostics go through `tracing` instead.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use pin_probe_application::ApplicationError;
use pin_probe_application::ports::Reporter;
use pin_probe_domain::{RunSummary, RunnerConfig, TestResult};

const RULE: &str = "==================================================";

/// Reporter writing plain lines to a writer, stdout by default.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<io::Stdout> {
    /// Creates a reporter printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleReporter<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Creates a reporter printing to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lines(&self, lines: &[&str]) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for line in lines {
            if let Err(error) = writeln!(out, "{line}") {
                tracing::warn!(%error, "Failed to write report line");
                return;
            }
        }
        if let Err(error) = out.flush() {
            tracing::warn!(%error, "Failed to flush report output");
        }
    }
}

fn format_result(result: &TestResult) -> String {
    let status = if result.success { "✅ PASS" } else { "❌ FAIL" };
    format!("{status} {}: {}", result.name, result.message)
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn run_started(&self, config: &RunnerConfig) {
        self.lines(&[
            "🚀 Starting Pin Device System Tests",
            &format!("🎯 Target Device: {}", config.target()),
            RULE,
        ]);
    }

    fn result_recorded(&self, result: &TestResult) {
        self.lines(&[&format_result(result)]);
    }

    fn check_aborted(&self, check: &str, error: &ApplicationError) {
        self.lines(&[&format!("❌ Check '{check}' failed with error: {error}")]);
    }

    fn run_finished(&self, summary: &RunSummary) {
        let verdict = if summary.all_passed() {
            "🎉 All tests passed! System integration successful."
        } else {
            "⚠️  Some tests failed. Please check the system."
        };
        self.lines(&[
            RULE,
            &format!("📊 Test Results: {summary} tests passed"),
            verdict,
        ]);
    }

    fn results_saved(&self, path: &Path, _count: usize) {
        self.lines(&[&format!("📁 Test results saved to {}", path.display())]);
    }
}
