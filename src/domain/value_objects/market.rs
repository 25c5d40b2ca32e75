use std::fmt;

/// Quote asset every market is priced in
pub const QUOTE_SUFFIX: &str = "_BNB";

/// Exchange pair token, e.g. `ABC-123_BNB`
///
/// The symbol is not checked against any listing; unknown symbols go to the
/// exchange as-is and surface as whatever it answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketId(String);

impl MarketId {
    pub fn from_symbol(symbol: &str) -> Self {
        MarketId(format!("{}{}", symbol.to_uppercase(), QUOTE_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
