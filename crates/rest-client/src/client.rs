//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
///
/// Default headers supplied at construction are sent on every request for
/// the lifetime of the client.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.pro.coinbase.com")
    /// * `timeout` - Request timeout duration
    /// * `default_headers` - Headers attached to every outgoing request
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        default_headers: HeaderMap,
    ) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(
        base_url: &str,
        default_headers: HeaderMap,
    ) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT, default_headers)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and deserialize the JSON response.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/accounts")
    /// * `query` - Optional query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request");

        let mut request = self.client.get(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request and return the raw body text plus response headers.
    ///
    /// Used where the caller needs response headers as well as the body,
    /// such as reading a pagination cursor header.
    pub async fn get_raw(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<(String, HeaderMap), RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request (raw)");

        let mut request = self.client.get(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let response_headers = response.headers().clone();
            let body = response.text().await?;
            Ok((body, response_headers))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// Make a POST request with a pre-serialized JSON body.
    ///
    /// The body is sent byte-for-byte as supplied so callers that sign the
    /// body can guarantee the signed bytes match the transmitted bytes.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, None);
        tracing::debug!(url = %url, "POST request");

        let mut request = self.client.post(&url);

        if let Some(b) = body {
            request = request.body(b.to_string());
        }

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "DELETE request");

        let mut request = self.client.delete(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}
