//! Pin Probe Domain - Core harness types
//!
//! This crate defines the data model for the Pin device test harness:
//! recorded results, runner configuration, request/response shapes and
//! the field-schema validation used against device responses.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod device;
pub mod error;
pub mod request;
pub mod response;
pub mod result;
pub mod validation;

pub use config::RunnerConfig;
pub use device::SettingsUpdate;
pub use error::{DomainError, DomainResult};
pub use request::{DeviceRequest, HttpMethod};
pub use response::{DeviceResponse, StatusCode};
pub use result::{ResultLog, RunSummary, TestResult};
pub use validation::{FieldSpec, JsonKind, Schema, ValidationError};
