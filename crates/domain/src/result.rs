//! Recorded test results
//!
//! Every check appends one or more `TestResult`s to a `ResultLog`. The log is
//! insertion-ordered and records are never modified after they are created.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one check or sub-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Name of the check, e.g. `API Status`.
    #[serde(rename = "test")]
    pub name: String,
    /// Whether the check passed.
    pub success: bool,
    /// Human-readable detail.
    pub message: String,
    /// When the result was recorded.
    pub timestamp: DateTime<Utc>,
}

impl TestResult {
    /// Creates a result.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        success: bool,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            success,
            message: message.into(),
            timestamp,
        }
    }

    /// Creates a passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(name, true, message, timestamp)
    }

    /// Creates a failing result.
    #[must_use]
    pub fn fail(name: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(name, false, message, timestamp)
    }
}

/// Insertion-ordered collection of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLog {
    results: Vec<TestResult>,
}

impl ResultLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// All results in recording order.
    #[must_use]
    pub fn as_slice(&self) -> &[TestResult] {
        &self.results
    }

    /// Iterates over the results in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestResult> {
        self.results.iter()
    }

    /// The most recent result, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TestResult> {
        self.results.last()
    }

    /// Number of recorded results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of passing results.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of failing results.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a TestResult;
    type IntoIter = std::slice::Iter<'a, TestResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Aggregate outcome of a run: how many checks returned true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Checks that passed.
    pub passed: usize,
    /// Checks attempted.
    pub total: usize,
}

impl RunSummary {
    /// Creates a summary.
    #[must_use]
    pub const fn new(passed: usize, total: usize) -> Self {
        Self { passed, total }
    }

    /// Check if every attempted check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Number of checks that did not pass.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total - self.passed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.passed, self.total)
    }
}
