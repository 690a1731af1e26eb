//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the runner and the outside world.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod reporter;
mod result_store;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError};
pub use reporter::Reporter;
pub use result_store::{ResultStore, ResultStoreError};
