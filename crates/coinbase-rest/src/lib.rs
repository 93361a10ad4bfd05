//! Coinbase Pro REST API client.
//!
//! This crate provides an authenticated client for the Coinbase Pro REST
//! API with:
//!
//! - **Request signing**: every outgoing request carries a fresh
//!   `CB-ACCESS-SIGN` / `CB-ACCESS-TIMESTAMP` header pair computed over the
//!   exact path, query, and body that go on the wire
//! - **Static credential headers**: `CB-ACCESS-KEY` and
//!   `CB-ACCESS-PASSPHRASE` installed for the lifetime of the client
//! - **Cursor pagination**: `get_paginated` follows the `cb-after` response
//!   header until a limit or end-of-data is reached
//! - **Typed listing endpoints**: accounts, account ledger, fills
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use coinbase_rest::{CoinbaseRestClient, PageOptions};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let client = CoinbaseRestClient::new(credentials)?;
//!
//! let accounts = client.list_accounts().await?;
//! let fills = client.list_fills("BTC-USD", PageOptions::with_limit(100)).await?;
//! ```

mod client;
mod error;
mod paginate;
mod responses;

pub use client::CoinbaseRestClient;
pub use error::CoinbaseRestError;
pub use paginate::PageOptions;
pub use responses::{Account, Fill, LedgerEntry};

pub use client::{
    ACCESS_KEY_HEADER, PASSPHRASE_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
pub use paginate::{CURSOR_HEADER, CURSOR_PARAM};
