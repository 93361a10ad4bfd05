//! Coinbase Pro API response types.
//!
//! The exchange encodes monetary amounts as JSON strings; those fields
//! deserialize into `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A trading account, from GET /accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub balance: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub available: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub hold: Decimal,
    pub profile_id: String,
    #[serde(default)]
    pub trading_enabled: bool,
}

/// One ledger entry, from GET /accounts/{id}/ledger.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub amount: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub balance: Decimal,
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// One fill, from GET /fills.
#[derive(Debug, Clone, Deserialize)]
pub struct Fill {
    pub trade_id: u64,
    pub product_id: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub size: Decimal,
    pub order_id: String,
    pub created_at: String,
    pub liquidity: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub fee: Decimal,
    pub settled: bool,
    pub side: String,
}

fn deserialize_decimal_from_str<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<Decimal>().map_err(serde::de::Error::custom)
}
