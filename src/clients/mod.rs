//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod sheet_client;

pub use sheet_client::*;
