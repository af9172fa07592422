//! REST API client for the C3 cryptocurrency exchange
//!
//! This crate provides a REST client for trading on C3, covering market
//! data, account queries and order placement/cancellation.
//!
//! # Features
//!
//! - **Market Data**: Order book, recent trades, ticker / last price
//! - **Account**: Balances, open orders, order and deal history
//! - **Trading**: Place and cancel limit orders
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA256 over the public key, the request URL and any JSON body;
//! see [`c3_auth::CanonicalMessage`] for the exact bytes.
//!
//! # Example
//!
//! ```no_run
//! use c3_rest::{C3RestClient, Credentials, OrderSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = C3RestClient::new()?;
//!     let price = client.get_last_price(&["btc", "usdt"]).await?;
//!     println!("BTC_USDT: {}", price);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = C3RestClient::with_credentials(creds)?;
//!     let balances = auth_client.get_current_balances(&["btc", "usdt"]).await?;
//!     println!("Balances: {:?}", balances);
//!
//!     let spec = OrderSpec::parse("sell", "0.001", "45000")?;
//!     let response = auth_client.place_order(&["btc", "usdt"], &spec).await?;
//!     println!("Order: {}", response);
//!
//!     Ok(())
//! }
//! ```
//!
//! No call is ever retried; every failure surfaces as a [`RestError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use c3_auth::Credentials;
pub use c3_types::{CurrencyPair, PriceMode, Side};
pub use client::{C3RestClient, ClientConfig, DEFAULT_BASE_URL};
pub use endpoints::DEFAULT_PAGE_SIZE;
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{Balance, OrderPrice, OrderSpec, PlaceOrderRequest, Ticker};
