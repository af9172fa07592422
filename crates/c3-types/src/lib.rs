//! Shared types for the C3 exchange REST API
//!
//! This crate provides the value types used across the C3 client crates.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`CurrencyPair`] - Trading pair in exchange format (e.g., "BTC_USDT")
//! - [`Side`] - Order side, serialized as `"buy"` / `"sell"`
//! - [`PriceMode`] - How limit prices are put on the wire
//! - [`PairError`] - Errors building a pair from caller tickers

pub mod enums;
pub mod pair;

// Re-export commonly used types
pub use enums::*;
pub use pair::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
