//! Pin Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod reporting;
pub mod serialization;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use persistence::JsonResultStore;
pub use reporting::ConsoleReporter;
pub use serialization::{SerializationError, from_json, to_json_stable};
