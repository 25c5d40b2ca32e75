pub mod candle_fetcher;
pub mod volatility_scorer;
