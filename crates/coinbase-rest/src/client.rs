//! Coinbase Pro REST API client.

use crate::error::CoinbaseRestError;
use crate::paginate::PageOptions;
use crate::responses::{Account, Fill, LedgerEntry};
use auth::{ApiCredentials, AuthError, RequestSigner};
use common::Environment;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use rest_client::RestClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Request timeout for Coinbase API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key; static for the client lifetime.
pub const ACCESS_KEY_HEADER: &str = "cb-access-key";
/// Header carrying the passphrase; static for the client lifetime.
pub const PASSPHRASE_HEADER: &str = "cb-access-passphrase";
/// Header carrying the per-request signature.
pub const SIGNATURE_HEADER: &str = "cb-access-sign";
/// Header carrying the per-request timestamp (whole seconds).
pub const TIMESTAMP_HEADER: &str = "cb-access-timestamp";

/// Coinbase Pro REST API client with authentication support.
///
/// Every request is signed individually: the timestamp, signature, and the
/// request itself are built fresh per call, so a single client can serve
/// concurrent requests without shared mutable state.
pub struct CoinbaseRestClient {
    client: RestClient,
    credentials: ApiCredentials,
}

impl CoinbaseRestClient {
    /// Create a new client for production.
    ///
    /// # Arguments
    /// * `credentials` - API credentials for authenticated requests
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built, or if the API
    /// key or passphrase is not valid HTTP header text.
    pub fn new(credentials: ApiCredentials) -> Result<Self, CoinbaseRestError> {
        Self::with_environment(credentials, Environment::Production)
    }

    /// Create a new client for a specific environment.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: Environment,
    ) -> Result<Self, CoinbaseRestError> {
        Self::with_base_url(credentials, environment.rest_base_url())
    }

    /// Create a new client against an explicit base URL.
    ///
    /// Intended for tests and proxies; production use goes through
    /// [`CoinbaseRestClient::new`] or [`CoinbaseRestClient::with_environment`].
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
    ) -> Result<Self, CoinbaseRestError> {
        let headers = Self::static_headers(&credentials)?;
        let client = RestClient::new(base_url, REQUEST_TIMEOUT, headers)?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Get the base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Headers installed at construction and sent on every request.
    fn static_headers(credentials: &ApiCredentials) -> Result<HeaderMap, AuthError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCESS_KEY_HEADER,
            HeaderValue::from_str(credentials.api_key())
                .map_err(|_| AuthError::InvalidKeyFormat)?,
        );
        headers.insert(
            PASSPHRASE_HEADER,
            HeaderValue::from_str(credentials.passphrase())
                .map_err(|_| AuthError::InvalidKeyFormat)?,
        );
        Ok(headers)
    }

    /// Current timestamp in whole seconds since the Unix epoch.
    fn timestamp_secs() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    /// The request path as it appears on the wire, query string included.
    ///
    /// Must match `RestClient`'s URL assembly exactly; the signature covers
    /// this string.
    fn request_path(path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.to_string(),
        }
    }

    /// Sign a request and return the per-request header values.
    fn sign_request(
        &self,
        method: &str,
        request_path: &str,
        body: Option<&str>,
    ) -> Result<(String, String), CoinbaseRestError> {
        let timestamp = Self::timestamp_secs();
        let signer = RequestSigner::new(&self.credentials);
        let signature = signer.sign(timestamp, method, request_path, body)?;
        Ok((signature, timestamp.to_string()))
    }

    // ========================================================================
    // Generic signed requests
    // ========================================================================

    /// Make a signed GET request.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/accounts")
    /// * `query` - Optional query string (without leading '?')
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, CoinbaseRestError> {
        let request_path = Self::request_path(path, query);
        let (signature, timestamp) = self.sign_request("GET", &request_path, None)?;

        let headers = [
            (SIGNATURE_HEADER, signature.as_str()),
            (TIMESTAMP_HEADER, timestamp.as_str()),
        ];

        Ok(self.client.get(path, query, Some(&headers)).await?)
    }

    /// Make a signed GET request returning the raw body and response headers.
    ///
    /// The pagination loop reads the next cursor from a response header.
    pub(crate) async fn get_raw(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<(String, HeaderMap), CoinbaseRestError> {
        let request_path = Self::request_path(path, query);
        let (signature, timestamp) = self.sign_request("GET", &request_path, None)?;

        let headers = [
            (SIGNATURE_HEADER, signature.as_str()),
            (TIMESTAMP_HEADER, timestamp.as_str()),
        ];

        Ok(self.client.get_raw(path, query, Some(&headers)).await?)
    }

    /// Make a signed POST request with a JSON body.
    ///
    /// The body is serialized exactly once; the same bytes are signed and
    /// transmitted. Serializing twice could produce different text (map
    /// ordering) and an invalid signature.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CoinbaseRestError> {
        let body_text = serde_json::to_string(body)
            .map_err(|e| CoinbaseRestError::BodySerialize(e.to_string()))?;
        let (signature, timestamp) = self.sign_request("POST", path, Some(&body_text))?;

        let headers = [
            (SIGNATURE_HEADER, signature.as_str()),
            (TIMESTAMP_HEADER, timestamp.as_str()),
        ];

        Ok(self
            .client
            .post(path, Some(&body_text), Some(&headers))
            .await?)
    }

    /// Make a signed DELETE request.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, CoinbaseRestError> {
        let request_path = Self::request_path(path, query);
        let (signature, timestamp) = self.sign_request("DELETE", &request_path, None)?;

        let headers = [
            (SIGNATURE_HEADER, signature.as_str()),
            (TIMESTAMP_HEADER, timestamp.as_str()),
        ];

        Ok(self.client.delete(path, query, Some(&headers)).await?)
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// List all trading accounts for the profile.
    ///
    /// GET /accounts
    pub async fn list_accounts(&self) -> Result<Vec<Account>, CoinbaseRestError> {
        let accounts: Vec<Account> = self.get("/accounts", None).await?;

        tracing::debug!(count = accounts.len(), "Fetched accounts");

        Ok(accounts)
    }

    /// Get a single account by ID.
    ///
    /// GET /accounts/{account_id}
    pub async fn get_account(&self, account_id: &str) -> Result<Account, CoinbaseRestError> {
        let path = format!("/accounts/{}", account_id);
        self.get(&path, None).await
    }

    /// List ledger activity for an account, following pagination cursors.
    ///
    /// GET /accounts/{account_id}/ledger
    pub async fn list_account_ledger(
        &self,
        account_id: &str,
        options: PageOptions,
    ) -> Result<Vec<LedgerEntry>, CoinbaseRestError> {
        let path = format!("/accounts/{}/ledger", account_id);
        let entries = self.get_paginated(&path, None, options).await?;

        tracing::debug!(
            account_id = %account_id,
            count = entries.len(),
            "Fetched account ledger"
        );

        Ok(entries)
    }

    // ========================================================================
    // Fills
    // ========================================================================

    /// List recent fills for a product, following pagination cursors.
    ///
    /// GET /fills
    pub async fn list_fills(
        &self,
        product_id: &str,
        options: PageOptions,
    ) -> Result<Vec<Fill>, CoinbaseRestError> {
        let query = format!("product_id={}", product_id);
        let fills = self.get_paginated("/fills", Some(&query), options).await?;

        tracing::debug!(
            product_id = %product_id,
            count = fills.len(),
            "Fetched fills"
        );

        Ok(fills)
    }
}

impl std::fmt::Debug for CoinbaseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseRestClient")
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
