//! Client for the transactions REST API.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
