//! Cursor-based pagination over listing endpoints.
//!
//! The exchange returns list endpoints one page at a time. Each response
//! carries an opaque cursor in the `cb-after` header; passing it back as the
//! `after` query parameter requests the next page. A page's cursor is only
//! known once that page has arrived, so fetching is strictly sequential.

use crate::client::CoinbaseRestClient;
use crate::error::CoinbaseRestError;
use serde::de::DeserializeOwned;

/// Response header carrying the next-page cursor.
pub const CURSOR_HEADER: &str = "cb-after";
/// Query parameter carrying the cursor on the next request.
pub const CURSOR_PARAM: &str = "after";

/// Options for a paginated fetch.
///
/// `limit` is the minimum number of items to stop at; `None` collects until
/// the server runs out of data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Stop fetching once at least this many items have accumulated.
    pub limit: Option<usize>,
}

impl PageOptions {
    /// Collect until end-of-data.
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// Stop fetching once at least `limit` items have accumulated.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl CoinbaseRestClient {
    /// Fetch a listing endpoint page by page, accumulating items in server
    /// order until `options.limit` is reached or the data ends.
    ///
    /// Termination conditions:
    /// - an absent, `null`, or empty-array body (natural end-of-data)
    /// - accumulated length reaching `limit`
    /// - a non-empty page without a cursor header; requesting without a
    ///   cursor again would re-fetch page one forever
    ///
    /// The last page is appended in full, so the result may exceed `limit`;
    /// it is never truncated. Items are never reordered or deduplicated.
    ///
    /// # Errors
    /// Returns `UnexpectedResponseShape` if a body is present but is not a
    /// JSON array, and any transport or signing failure as-is. A failure on
    /// any page aborts the whole call.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        options: PageOptions,
    ) -> Result<Vec<T>, CoinbaseRestError> {
        let mut items: Vec<T> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page_query = build_page_query(query, cursor.as_deref());
            let (body, headers) = self.get_raw(path, page_query.as_deref()).await?;

            if body.trim().is_empty() {
                break;
            }

            let value: serde_json::Value = serde_json::from_str(&body)
                .map_err(|e| rest_client::RestError::Parse(e.to_string()))?;

            if value.is_null() {
                break;
            }

            let entries = match value {
                serde_json::Value::Array(entries) => entries,
                other => {
                    return Err(CoinbaseRestError::UnexpectedResponseShape(
                        other.to_string(),
                    ))
                }
            };

            if entries.is_empty() {
                break;
            }

            tracing::debug!(
                path = %path,
                page_size = entries.len(),
                accumulated = items.len(),
                "Fetched page"
            );

            for entry in entries {
                items.push(
                    serde_json::from_value(entry)
                        .map_err(|e| rest_client::RestError::Parse(e.to_string()))?,
                );
            }

            if let Some(limit) = options.limit {
                if items.len() >= limit {
                    break;
                }
            }

            cursor = headers
                .get(CURSOR_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);

            if cursor.is_none() {
                break;
            }
        }

        Ok(items)
    }
}

/// Combine the caller's query string with the current cursor.
fn build_page_query(base: Option<&str>, cursor: Option<&str>) -> Option<String> {
    match (base, cursor) {
        (Some(q), Some(c)) if !q.is_empty() => {
            Some(format!("{}&{}={}", q, CURSOR_PARAM, c))
        }
        (_, Some(c)) => Some(format!("{}={}", CURSOR_PARAM, c)),
        (Some(q), None) if !q.is_empty() => Some(q.to_string()),
        _ => None,
    }
}
