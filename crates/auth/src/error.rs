use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The API secret is not valid base64.
    #[error("API secret is not valid base64")]
    MalformedSecret,

    /// The API key or passphrase cannot be used as an HTTP header value.
    #[error("Invalid API key or passphrase format")]
    InvalidKeyFormat,
}
