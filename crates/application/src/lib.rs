//! Pin Probe Application - Checks and test runner
//!
//! This crate contains the device checks, the runner that sequences them,
//! and the port traits that infrastructure adapters implement.

pub mod checks;
pub mod error;
pub mod ports;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;

pub use checks::{Check, CheckContext, default_checks};
pub use error::{ApplicationError, ApplicationResult};
pub use runner::DeviceTestRunner;
