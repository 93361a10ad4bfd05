//! Coinbase REST API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the Coinbase Pro REST API.
#[derive(Debug, Error)]
pub enum CoinbaseRestError {
    /// REST client error (network, timeout, HTTP status, parse).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Authentication error (malformed secret, bad header material).
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A paginated endpoint returned a body that is not a JSON array.
    ///
    /// Surfaced as an error rather than treated as end-of-data so that a
    /// server-side error payload is never silently read as an empty page.
    #[error("Unexpected response shape, expected a JSON array: {0}")]
    UnexpectedResponseShape(String),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    BodySerialize(String),
}
