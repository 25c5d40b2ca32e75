#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err("Price must be finite".to_string());
        }
        if value >= 0.0 {
            Ok(Price(value))
        } else {
            Err("Price must be non-negative".to_string())
        }
    }

    /// Parse a price from the decimal-string encoding used by the klines endpoint
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = raw
            .parse::<f64>()
            .map_err(|e| format!("'{}' is not a decimal: {}", raw, e))?;
        Price::new(value).map_err(|e| format!("'{}': {}", raw, e))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
