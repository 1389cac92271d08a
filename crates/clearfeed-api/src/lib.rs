//! HTTP client for the Clearfeed backend.
//!
//! Provides [`HttpApiClient`], the concrete implementation of the API
//! traits defined in `clearfeed-core`, and its configuration.

pub mod config;
pub mod http_client;

pub use config::ApiConfig;
pub use http_client::HttpApiClient;
