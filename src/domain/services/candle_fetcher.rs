use crate::domain::entities::candle::Candle;
use crate::domain::errors::FetchResult;
use crate::domain::repositories::kline_source::{KlineQuery, KlineSource};
use crate::domain::value_objects::market::MarketId;
use crate::domain::value_objects::time_window::TimeWindow;
use std::sync::Arc;
use tracing::debug;

/// Walks a time window one day at a time and concatenates every page
pub struct CandleFetcher {
    source: Arc<dyn KlineSource>,
}

impl CandleFetcher {
    pub fn new(source: Arc<dyn KlineSource>) -> Self {
        CandleFetcher { source }
    }

    /// Fetch all candles for `market` over `window`, in request order.
    ///
    /// An empty window makes no requests. The first failing page aborts the
    /// whole call and no partial list is returned.
    pub async fn fetch_candles(
        &self,
        window: &TimeWindow,
        market: &MarketId,
    ) -> FetchResult<Vec<Candle>> {
        let mut candles = Vec::new();

        for chunk in window.chunks() {
            let query = KlineQuery::new(
                market.clone(),
                chunk.start.timestamp_millis(),
                chunk.end.timestamp_millis(),
            );
            let page = self.source.fetch_page(&query).await?;
            debug!(
                "Fetched {} candles for {} [{}, {})",
                page.len(),
                market,
                query.start_time,
                query.end_time
            );
            candles.extend(page);
        }

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FetchError;
    use crate::domain::value_objects::time_window::CHUNK_MILLIS;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Serves canned pages in order and records every query it sees
    struct RecordingSource {
        pages: Mutex<VecDeque<FetchResult<Vec<Candle>>>>,
        queries: Mutex<Vec<KlineQuery>>,
    }

    impl RecordingSource {
        fn new(pages: Vec<FetchResult<Vec<Candle>>>) -> Arc<Self> {
            Arc::new(RecordingSource {
                pages: Mutex::new(pages.into_iter().collect()),
                queries: Mutex::new(Vec::new()),
            })
        }

        fn queries(&self) -> Vec<KlineQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KlineSource for RecordingSource {
        async fn fetch_page(&self, query: &KlineQuery) -> FetchResult<Vec<Candle>> {
            self.queries.lock().unwrap().push(query.clone());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn candle(high: f64, low: f64) -> Candle {
        Candle::new(high, low).unwrap()
    }

    #[tokio::test]
    async fn test_empty_window_makes_no_requests() {
        let source = RecordingSource::new(vec![]);
        let fetcher = CandleFetcher::new(source.clone());
        let window = TimeWindow::from_millis(CHUNK_MILLIS, CHUNK_MILLIS).unwrap();

        let candles = fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await
            .unwrap();

        assert!(candles.is_empty());
        assert!(source.queries().is_empty());
    }

    #[tokio::test]
    async fn test_inverted_window_makes_no_requests() {
        let source = RecordingSource::new(vec![]);
        let fetcher = CandleFetcher::new(source.clone());
        let window = TimeWindow::from_millis(2 * CHUNK_MILLIS, 0).unwrap();

        let candles = fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await
            .unwrap();

        assert!(candles.is_empty());
        assert!(source.queries().is_empty());
    }

    #[tokio::test]
    async fn test_single_day_returns_page_as_is() {
        let source = RecordingSource::new(vec![Ok(vec![candle(12.0, 5.0), candle(20.0, 1.0)])]);
        let fetcher = CandleFetcher::new(source.clone());
        let window = TimeWindow::from_millis(0, CHUNK_MILLIS).unwrap();

        let candles = fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await
            .unwrap();

        assert_eq!(candles, vec![candle(12.0, 5.0), candle(20.0, 1.0)]);
        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].symbol.as_str(), "ABC_BNB");
        assert_eq!(queries[0].start_time, 0);
        assert_eq!(queries[0].end_time, CHUNK_MILLIS);
    }

    #[tokio::test]
    async fn test_three_days_concatenate_in_request_order() {
        let source = RecordingSource::new(vec![
            Ok(vec![candle(1.0, 0.5)]),
            Ok(vec![candle(2.0, 1.5), candle(2.5, 2.0)]),
            Ok(vec![candle(3.0, 2.5)]),
        ]);
        let fetcher = CandleFetcher::new(source.clone());
        let start = 1_560_000_000_000;
        let window = TimeWindow::from_millis(start, start + 3 * CHUNK_MILLIS).unwrap();

        let candles = fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await
            .unwrap();

        assert_eq!(
            candles,
            vec![
                candle(1.0, 0.5),
                candle(2.0, 1.5),
                candle(2.5, 2.0),
                candle(3.0, 2.5)
            ]
        );

        let queries = source.queries();
        assert_eq!(queries.len(), 3);
        for (i, query) in queries.iter().enumerate() {
            assert_eq!(query.start_time, start + i as i64 * CHUNK_MILLIS);
            assert_eq!(query.end_time - query.start_time, CHUNK_MILLIS);
            assert_eq!(query.interval, "5m");
            assert_eq!(query.limit, 1000);
        }
    }

    #[tokio::test]
    async fn test_error_aborts_remaining_pages() {
        let source = RecordingSource::new(vec![
            Ok(vec![candle(1.0, 0.5)]),
            Err(FetchError::Decode("bad row".to_string())),
            Ok(vec![candle(3.0, 2.5)]),
        ]);
        let fetcher = CandleFetcher::new(source.clone());
        let window = TimeWindow::from_millis(0, 3 * CHUNK_MILLIS).unwrap();

        let result = fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await;

        assert_eq!(result, Err(FetchError::Decode("bad row".to_string())));
        assert_eq!(source.queries().len(), 2);
    }

    #[tokio::test]
    async fn test_partial_last_day_requests_full_day() {
        let source = RecordingSource::new(vec![]);
        let fetcher = CandleFetcher::new(source.clone());
        let window = TimeWindow::from_millis(0, 1).unwrap();

        fetcher
            .fetch_candles(&window, &MarketId::from_symbol("abc"))
            .await
            .unwrap();

        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].end_time, CHUNK_MILLIS);
    }
}
