//! Authentication and signing for the Coinbase Pro REST API.
//!
//! This crate provides secure credential management and per-request signing
//! for authenticated API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: the API secret is wrapped in `SecretString` to
//!   prevent accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: implements the pre-hash signing scheme required
//!   by the exchange (base64 secret, base64 signature).
//! - **Environment Loading**: credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//!
//! // Sign a request
//! let signer = RequestSigner::new(&credentials);
//! let signature = signer.sign(timestamp_secs, "GET", "/accounts", None)?;
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::RequestSigner;
