//! Side and PriceMode enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// The exchange's `isBid` flag: true for buys
    pub fn is_bid(&self) -> bool {
        matches!(self, Self::Buy)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(SideParseError(s.to_string())),
        }
    }
}

/// Error parsing an order side
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order side: {0:?} (expected \"buy\" or \"sell\")")]
pub struct SideParseError(pub String);

/// How a limit price is encoded in a place-order body
///
/// The exchange has been observed accepting whole-number prices, so the
/// default drops the fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceMode {
    /// Truncate toward zero and send an integer
    #[default]
    Truncate,
    /// Send the full-precision price as a JSON float
    Exact,
}
