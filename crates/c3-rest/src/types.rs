//! Types for C3 REST API requests and responses

use crate::error::{RestError, RestResult};
use c3_types::{CurrencyPair, PriceMode, Side};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Account Types
// ============================================================================

/// One wallet balance entry
///
/// Only `currencyCode` is interpreted; every other field is passed through
/// untouched in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Currency code (e.g., "BTC")
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    /// Remaining fields as returned by the exchange
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of the balances endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct BalancesResponse {
    pub balances: Vec<Balance>,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker data for a currency pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Last traded price
    pub price: Decimal,
    /// Best bid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_bid: Option<Decimal>,
    /// Best ask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_ask: Option<Decimal>,
    /// Remaining fields as returned by the exchange
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Ticker {
    /// Get the spread (ask - bid), if both sides are present
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask? - self.best_bid?)
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// What to trade, before it is bound to a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec {
    /// Buy or sell
    pub side: Side,
    /// Order amount in base currency, must be positive
    pub amount: Decimal,
    /// Limit price in quote currency, must be positive
    pub price: Decimal,
}

impl OrderSpec {
    /// Create an order spec
    pub fn new(side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            side,
            amount,
            price,
        }
    }

    /// Create a buy order spec
    pub fn buy(amount: Decimal, price: Decimal) -> Self {
        Self::new(Side::Buy, amount, price)
    }

    /// Create a sell order spec
    pub fn sell(amount: Decimal, price: Decimal) -> Self {
        Self::new(Side::Sell, amount, price)
    }

    /// Parse an order spec from its string form
    ///
    /// # Arguments
    /// * `direction` - "buy" or "sell", any case
    /// * `volume` - Decimal amount (e.g., "0.001")
    /// * `price` - Decimal price (e.g., "45000")
    pub fn parse(direction: &str, volume: &str, price: &str) -> RestResult<Self> {
        let side: Side = direction.parse()?;
        let amount = volume
            .parse::<Decimal>()
            .map_err(|e| RestError::InvalidArgument(format!("volume {:?}: {}", volume, e)))?;
        let price = price
            .parse::<Decimal>()
            .map_err(|e| RestError::InvalidArgument(format!("price {:?}: {}", price, e)))?;

        Ok(Self::new(side, amount, price))
    }

    /// Check the spec can be sent
    pub fn validate(&self) -> RestResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(RestError::InvalidArgument(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(RestError::InvalidArgument(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Price as it appears in the order body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderPrice {
    /// Truncated whole-number price
    Whole(i64),
    /// Full-precision price
    Exact(f64),
}

/// Body of `POST /api/orders`
///
/// Field order is part of the signed bytes and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// True for buy orders
    pub is_bid: bool,
    /// Order side
    pub side: Side,
    /// Pair code (e.g., "BTC_USDT")
    pub currency_pair_code: CurrencyPair,
    /// Amount as a JSON float
    pub amount: f64,
    /// Price, encoded according to the [`PriceMode`]
    pub price: OrderPrice,
}

impl PlaceOrderRequest {
    /// Build the order body for a pair
    pub fn new(pair: CurrencyPair, spec: &OrderSpec, mode: PriceMode) -> RestResult<Self> {
        spec.validate()?;

        let amount = spec.amount.to_f64().ok_or_else(|| {
            RestError::InvalidArgument(format!("amount {} is not representable", spec.amount))
        })?;

        let price = match mode {
            PriceMode::Truncate => {
                let whole = spec.price.trunc().to_i64().ok_or_else(|| {
                    RestError::InvalidArgument(format!("price {} is out of range", spec.price))
                })?;
                if whole == 0 {
                    return Err(RestError::InvalidArgument(format!(
                        "price {} truncates to zero",
                        spec.price
                    )));
                }
                OrderPrice::Whole(whole)
            }
            PriceMode::Exact => OrderPrice::Exact(spec.price.to_f64().ok_or_else(|| {
                RestError::InvalidArgument(format!("price {} is not representable", spec.price))
            })?),
        };

        Ok(Self {
            is_bid: spec.side.is_bid(),
            side: spec.side,
            currency_pair_code: pair,
            amount,
            price,
        })
    }

    /// Compact JSON, exactly as transmitted and signed
    pub fn to_json(&self) -> RestResult<String> {
        serde_json::to_string(self)
            .map_err(|e| RestError::InvalidArgument(format!("order body: {}", e)))
    }
}
