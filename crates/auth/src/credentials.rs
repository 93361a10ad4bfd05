//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the secret key
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// API credentials for authenticated requests.
///
/// The secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
///
/// The passphrase is sent on every request but is still a credential, so
/// `Debug` redacts it alongside the secret.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret: SecretString,
    passphrase: String,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `COINBASE_API_KEY` - The API key (public)
    /// - `COINBASE_API_SECRET` - The base64-encoded secret (private)
    /// - `COINBASE_API_PASSPHRASE` - The API passphrase (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if any variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var("COINBASE_API_KEY")
            .map_err(|_| AuthError::MissingEnvVar("COINBASE_API_KEY".into()))?;

        let secret = std::env::var("COINBASE_API_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("COINBASE_API_SECRET".into()))?;

        let passphrase = std::env::var("COINBASE_API_PASSPHRASE")
            .map_err(|_| AuthError::MissingEnvVar("COINBASE_API_PASSPHRASE".into()))?;

        Ok(Self::new(api_key, secret, passphrase))
    }

    /// Create credentials from explicit values.
    ///
    /// The secret is expected to be base64-encoded, as issued by the
    /// exchange. It is not decoded here; decoding happens at signing time.
    pub fn new(api_key: String, secret: String, passphrase: String) -> Self {
        Self {
            api_key,
            secret: SecretString::from(secret),
            passphrase,
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API passphrase.
    ///
    /// Sent as a header on every request; never log it.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Expose the base64-encoded secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
