//! Result persistence adapters.

mod result_store;

pub use result_store::JsonResultStore;
