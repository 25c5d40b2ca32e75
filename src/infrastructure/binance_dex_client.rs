use crate::domain::entities::candle::Candle;
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::repositories::kline_source::{KlineQuery, KlineSource};
use crate::domain::value_objects::price::Price;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use tracing::debug;
use url::Url;

/// Binance DEX API endpoints
pub const BINANCE_DEX_API_BASE: &str = "https://testnet-dex.binance.org";
const KLINES_PATH: &str = "/api/v1/klines";

const USER_AGENT: &str = "volscore/0.1.0";

/// One row of the klines response.
///
/// Rows are positional arrays: `[openTime, open, high, low, close, ...]`.
/// Only `high` (index 2) and `low` (index 3) are kept, still in their
/// decimal-string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineRow {
    pub high: String,
    pub low: String,
}

impl<'de> Deserialize<'de> for KlineRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = KlineRow;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a kline array with string high at index 2 and string low at index 3")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<KlineRow, A::Error>
            where
                A: SeqAccess<'de>,
            {
                seq.next_element::<IgnoredAny>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                seq.next_element::<IgnoredAny>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let high: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let low: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(KlineRow { high, low })
            }
        }

        deserializer.deserialize_seq(RowVisitor)
    }
}

impl KlineRow {
    pub fn to_candle(&self) -> Result<Candle, String> {
        let high = Price::parse(&self.high).map_err(|e| format!("high {}", e))?;
        let low = Price::parse(&self.low).map_err(|e| format!("low {}", e))?;
        Ok(Candle { high, low })
    }
}

/// Decode a whole klines response body.
///
/// A single bad row fails the page; nothing is skipped.
pub fn decode_klines(body: &str) -> FetchResult<Vec<Candle>> {
    let rows: Vec<KlineRow> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.to_candle()
                .map_err(|e| FetchError::Decode(format!("row {}: {}", i, e)))
        })
        .collect()
}

/// Client for the public Binance DEX klines endpoint
pub struct BinanceDexClient {
    client: Client,
    api_base: String,
}

impl BinanceDexClient {
    pub fn new() -> Self {
        Self::with_base_url(BINANCE_DEX_API_BASE)
    }

    /// Point the client at another host, e.g. a local test server
    pub fn with_base_url(api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for one page
    pub fn klines_url(&self, query: &KlineQuery) -> FetchResult<Url> {
        Url::parse_with_params(&format!("{}{}", self.api_base, KLINES_PATH), query.params())
            .map_err(|e| FetchError::Transport(format!("Invalid klines URL: {}", e)))
    }
}

impl Default for BinanceDexClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KlineSource for BinanceDexClient {
    async fn fetch_page(&self, query: &KlineQuery) -> FetchResult<Vec<Candle>> {
        let url = self.klines_url(query)?;
        debug!("Raw URL: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to get klines: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read klines response: {}", e)))?;
        debug!("Raw response: {}", body);

        decode_klines(&body)
    }
}
