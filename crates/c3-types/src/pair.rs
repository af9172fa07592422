//! Currency pair codes (BTC_USDT format)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Trading pair in the exchange's `BASE_QUOTE` format
///
/// Both tickers are upper-cased on construction, so `["btc", "usdt"]` and
/// `["BTC", "USDT"]` produce the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Separator between base and quote in a pair code
    pub const SEPARATOR: char = '_';

    /// Create a pair from a base and quote ticker
    pub fn new(base: impl AsRef<str>, quote: impl AsRef<str>) -> Result<Self, PairError> {
        Ok(Self {
            base: normalize_ticker(base.as_ref())?,
            quote: normalize_ticker(quote.as_ref())?,
        })
    }

    /// Create a pair from a caller-supplied ticker list
    ///
    /// Exactly two tickers are required: `[base, quote]`.
    pub fn from_tickers<T: AsRef<str>>(tickers: &[T]) -> Result<Self, PairError> {
        match tickers {
            [base, quote] => Self::new(base, quote),
            _ => Err(PairError::WrongTickerCount(tickers.len())),
        }
    }

    /// Get the base ticker (e.g., "BTC" from "BTC_USDT")
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Get the quote ticker (e.g., "USDT" from "BTC_USDT")
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Get the `currencyPairCode` value sent to the exchange
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// Upper-case a ticker after checking it is a plain symbol
///
/// Tickers end up verbatim in query strings and signed messages, so only
/// ASCII alphanumerics are accepted.
pub fn normalize_ticker(ticker: &str) -> Result<String, PairError> {
    if ticker.is_empty() {
        return Err(PairError::EmptyTicker);
    }
    if !ticker.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PairError::InvalidTicker(ticker.to_string()));
    }
    Ok(ticker.to_ascii_uppercase())
}

impl FromStr for CurrencyPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(Self::SEPARATOR).collect();
        Self::from_tickers(parts.as_slice())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, Self::SEPARATOR, self.quote)
    }
}

impl Serialize for CurrencyPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Error building a currency pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("a currency pair needs exactly two tickers, got {0}")]
    WrongTickerCount(usize),

    #[error("ticker must not be empty")]
    EmptyTicker,

    #[error("ticker must be ASCII alphanumeric: {0:?}")]
    InvalidTicker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_upper_cased() {
        let lower = CurrencyPair::from_tickers(&["btc", "usdt"]).unwrap();
        let upper = CurrencyPair::from_tickers(&["BTC", "USDT"]).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.code(), "BTC_USDT");
        assert_eq!(lower.base(), "BTC");
        assert_eq!(lower.quote(), "USDT");
    }

    #[test]
    fn test_pair_requires_two_tickers() {
        let none: [&str; 0] = [];
        assert_eq!(
            CurrencyPair::from_tickers(&none),
            Err(PairError::WrongTickerCount(0))
        );
        assert_eq!(
            CurrencyPair::from_tickers(&["btc"]),
            Err(PairError::WrongTickerCount(1))
        );
        assert_eq!(
            CurrencyPair::from_tickers(&["btc", "usdt", "eth"]),
            Err(PairError::WrongTickerCount(3))
        );
    }

    #[test]
    fn test_pair_rejects_bad_tickers() {
        assert_eq!(CurrencyPair::new("", "USDT"), Err(PairError::EmptyTicker));
        assert!(matches!(
            CurrencyPair::new("BTC&status=x", "USDT"),
            Err(PairError::InvalidTicker(_))
        ));
        assert!(matches!(
            CurrencyPair::new("BTC", "US DT"),
            Err(PairError::InvalidTicker(_))
        ));
    }

    #[test]
    fn test_pair_parse() {
        let pair: CurrencyPair = "del_usdt".parse().unwrap();
        assert_eq!(pair.to_string(), "DEL_USDT");
        assert!("BTCUSDT".parse::<CurrencyPair>().is_err());
        assert!("BTC_".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_pair_serde() {
        let pair = CurrencyPair::new("eth", "usdt").unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"ETH_USDT\"");

        let parsed: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
