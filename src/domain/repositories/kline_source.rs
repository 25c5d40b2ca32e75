//! Kline Source Trait
//!
//! `KlineSource` is the seam between the pagination logic and the HTTP
//! transport. The fetcher only ever asks for one page at a time; how that page
//! is requested and decoded is up to the implementation, which keeps the
//! fetcher testable with an in-memory source.

use crate::domain::entities::candle::Candle;
use crate::domain::errors::FetchResult;
use crate::domain::value_objects::market::MarketId;
use async_trait::async_trait;

/// Sampling interval requested from the exchange
pub const KLINE_INTERVAL: &str = "5m";

/// Largest page the exchange returns in one call.
///
/// A one-day chunk at 5m holds 288 candles, well under this cap. Changing
/// either the interval or the chunk length must keep candles-per-chunk
/// below this value or pages get silently truncated.
pub const PAGE_LIMIT: u32 = 1000;

/// One page request against the klines endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineQuery {
    pub symbol: MarketId,
    pub interval: &'static str,
    /// Epoch milliseconds, inclusive
    pub start_time: i64,
    /// Epoch milliseconds
    pub end_time: i64,
    pub limit: u32,
}

impl KlineQuery {
    pub fn new(symbol: MarketId, start_time: i64, end_time: i64) -> Self {
        KlineQuery {
            symbol,
            interval: KLINE_INTERVAL,
            start_time,
            end_time,
            limit: PAGE_LIMIT,
        }
    }

    /// Query string pairs in the order the exchange documents them
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.as_str().to_string()),
            ("interval", self.interval.to_string()),
            ("startTime", self.start_time.to_string()),
            ("endTime", self.end_time.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[async_trait]
pub trait KlineSource: Send + Sync {
    /// Fetch and decode a single page, preserving the exchange's row order
    async fn fetch_page(&self, query: &KlineQuery) -> FetchResult<Vec<Candle>>;
}
