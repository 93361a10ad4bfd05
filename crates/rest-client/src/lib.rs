//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - Static default headers installed at construction
//! - JSON response deserialization
//! - Per-request header injection for authentication
//! - Raw responses (body text plus headers) for callers that need to read
//!   response headers, such as pagination cursors
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use reqwest::header::HeaderMap;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TimeResponse {
//!     epoch: f64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://api.pro.coinbase.com", HeaderMap::new())?;
//! let time: TimeResponse = client.get("/time", None, None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
