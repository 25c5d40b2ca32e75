use crate::domain::entities::candle::Candle;

/// Candles whose high exceeds this are left out of the score entirely
pub const PRICE_CEILING: f64 = 15.0;

/// Largest contribution a single candle can make
pub const RANGE_CLAMP: f64 = 10.0;

/// Bonus reported alongside the score
pub const BONUS_MULTIPLIER: f64 = 3.0;

/// Reduces a candle sequence to a single volatility score
pub trait VolatilityScoreCalculator {
    fn score(&self, candles: &[Candle]) -> f64;
}

/// Sum of high-low ranges, each clamped to [`RANGE_CLAMP`], over candles
/// whose high does not exceed [`PRICE_CEILING`]
#[derive(Debug, Default, Clone, Copy)]
pub struct VolatilityScorer;

impl VolatilityScoreCalculator for VolatilityScorer {
    fn score(&self, candles: &[Candle]) -> f64 {
        candles
            .iter()
            .filter(|c| c.high.value() <= PRICE_CEILING)
            .fold(0.0, |sum, c| sum + c.range().min(RANGE_CLAMP))
    }
}

/// Score plus its derived bonus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityReport {
    pub score: f64,
    pub bonus: f64,
}

impl VolatilityReport {
    pub fn from_score(score: f64) -> Self {
        VolatilityReport {
            score,
            bonus: BONUS_MULTIPLIER * score,
        }
    }
}
