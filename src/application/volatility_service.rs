use crate::domain::errors::FetchResult;
use crate::domain::repositories::kline_source::KlineSource;
use crate::domain::services::candle_fetcher::CandleFetcher;
use crate::domain::services::volatility_scorer::{
    VolatilityReport, VolatilityScoreCalculator, VolatilityScorer,
};
use crate::domain::value_objects::market::MarketId;
use crate::domain::value_objects::time_window::TimeWindow;
use std::sync::Arc;
use tracing::info;

/// Fetches candles for a market and scores them
pub struct VolatilityService {
    fetcher: CandleFetcher,
    scorer: VolatilityScorer,
}

impl VolatilityService {
    pub fn new(source: Arc<dyn KlineSource>) -> Self {
        VolatilityService {
            fetcher: CandleFetcher::new(source),
            scorer: VolatilityScorer,
        }
    }

    /// Score `market` over `window`
    pub async fn evaluate(
        &self,
        window: &TimeWindow,
        market: &MarketId,
    ) -> FetchResult<VolatilityReport> {
        info!("Market: {}", market);
        info!("Window: {} to {}", window.start, window.end);

        let candles = self.fetcher.fetch_candles(window, market).await?;
        let score = self.scorer.score(&candles);
        info!("Scored {} candles for {}", candles.len(), market);

        Ok(VolatilityReport::from_score(score))
    }
}
