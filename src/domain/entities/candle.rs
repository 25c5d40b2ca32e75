use crate::domain::value_objects::price::Price;

/// Price extremes of one 5-minute interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub high: Price,
    pub low: Price,
}

impl Candle {
    pub fn new(high: f64, low: f64) -> Result<Self, String> {
        Ok(Candle {
            high: Price::new(high)?,
            low: Price::new(low)?,
        })
    }

    /// High minus low. Not clamped and may be negative for inverted data.
    pub fn range(&self) -> f64 {
        self.high.value() - self.low.value()
    }
}
