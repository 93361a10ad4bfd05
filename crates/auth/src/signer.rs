//! HMAC-SHA256 request signing for the Coinbase Pro API.

use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request signer for authenticated Coinbase Pro API calls.
///
/// Signing is a pure function of its inputs: the same timestamp, method,
/// path, body, and secret always produce the same signature.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a request and return the base64-encoded signature.
    ///
    /// This method:
    /// 1. Base64-decodes the secret into raw key bytes
    /// 2. Builds the pre-hash string `{timestamp}{METHOD}{path}{body}`
    ///    with no separators between fields
    /// 3. Computes HMAC-SHA256 of the pre-hash string with the key
    /// 4. Base64-encodes the digest
    ///
    /// # Arguments
    /// * `timestamp` - Whole seconds since the Unix epoch, rendered in
    ///   decimal form in the pre-hash string
    /// * `method` - HTTP verb, any case; uppercased before use
    /// * `request_path` - Request path plus query string, exactly as it
    ///   will appear on the wire
    /// * `body` - The exact serialized JSON text that will be transmitted;
    ///   `None` contributes the empty string
    ///
    /// Any change to method case, path (including query order), body bytes,
    /// or timestamp changes the signature, so the caller must sign exactly
    /// what will be sent.
    ///
    /// # Errors
    /// Returns `AuthError::MalformedSecret` if the secret is not valid
    /// base64. The secret is decoded lazily, so a bad secret surfaces here
    /// rather than at credential construction.
    pub fn sign(
        &self,
        timestamp: i64,
        method: &str,
        request_path: &str,
        body: Option<&str>,
    ) -> Result<String, AuthError> {
        let key = BASE64
            .decode(self.credentials.expose_secret())
            .map_err(|_| AuthError::MalformedSecret)?;

        let prehash = format!(
            "{}{}{}{}",
            timestamp,
            method.to_uppercase(),
            request_path,
            body.unwrap_or("")
        );

        let mut mac =
            HmacSha256::new_from_slice(&key).expect("HMAC can take key of any size");
        mac.update(prehash.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> ApiCredentials {
        // "c2VjcmV0" is base64 for "secret"
        ApiCredentials::new("key".into(), "c2VjcmV0".into(), "phrase".into())
    }

    #[test]
    fn test_sign_known_vector() {
        // HMAC-SHA256 of "1000000000GET/accounts" with key bytes "secret",
        // base64-encoded
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let signature = signer.sign(1_000_000_000, "GET", "/accounts", None).unwrap();

        assert_eq!(signature, "7wx/nqjhtUMwmRMqL+o+0qnC9qtl0fLF/uynw1cGKv0=");
    }

    #[test]
    fn test_sign_deterministic() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let body = Some(r#"{"size":"1.0"}"#);
        let first = signer.sign(1_000_000_000, "POST", "/orders", body).unwrap();
        let second = signer.sign(1_000_000_000, "POST", "/orders", body).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_sensitive_to_each_input() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let base = signer
            .sign(1_000_000_000, "GET", "/accounts", Some("{}"))
            .unwrap();

        let changed = [
            signer.sign(1_000_000_001, "GET", "/accounts", Some("{}")),
            signer.sign(1_000_000_000, "POST", "/accounts", Some("{}")),
            signer.sign(1_000_000_000, "GET", "/accounts/", Some("{}")),
            signer.sign(1_000_000_000, "GET", "/accounts", Some("{ }")),
        ];

        for other in changed {
            assert_ne!(base, other.unwrap());
        }
    }

    #[test]
    fn test_sign_normalizes_method_case() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let lower = signer.sign(1_000_000_000, "get", "/accounts", None).unwrap();
        let upper = signer.sign(1_000_000_000, "GET", "/accounts", None).unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn test_sign_missing_body_equals_empty_body() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let none = signer.sign(1_000_000_000, "GET", "/accounts", None).unwrap();
        let empty = signer
            .sign(1_000_000_000, "GET", "/accounts", Some(""))
            .unwrap();

        assert_eq!(none, empty);
    }

    #[test]
    fn test_sign_path_includes_query_string() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let signature = signer
            .sign(1_000_000_000, "GET", "/fills?product_id=BTC-USD", None)
            .unwrap();

        assert_eq!(signature, "iQTdQpoRBeEEg43vk2gTTskMmVsHHVFSQPwdfw5kRVc=");
    }

    #[test]
    fn test_sign_malformed_secret() {
        let creds = ApiCredentials::new("key".into(), "not base64!!!".into(), "phrase".into());
        let signer = RequestSigner::new(&creds);

        let result = signer.sign(1_000_000_000, "GET", "/accounts", None);

        assert!(matches!(result, Err(AuthError::MalformedSecret)));
    }
}
