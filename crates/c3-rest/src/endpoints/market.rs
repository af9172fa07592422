//! Public market data endpoints
//!
//! These endpoints don't require authentication and carry no auth headers.

use super::{pair, query_string};
use crate::client::{decode, HttpContext};
use crate::error::RestResult;
use crate::types::Ticker;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

const ORDER_BOOK_PATH: &str = "/api/orderbook";
const DEALS_PATH: &str = "/api/deals";
const TICKERS_PATH: &str = "/api/tickers";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    http: &'a HttpContext,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(http: &'a HttpContext) -> Self {
        Self { http }
    }

    /// Make an unauthenticated GET request
    async fn get(&self, path: &str, query: &str) -> RestResult<String> {
        let url = self.http.url(path, query);
        debug!("Fetching {}{}", path, query);

        self.http.send(self.http.client().get(&url)).await
    }

    /// Get the current order book
    ///
    /// The exchange fixes the depth (about 40 levels per side); the raw
    /// bid/ask structure is returned as-is.
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]` (e.g., `["btc", "usdt"]`)
    #[instrument(skip(self))]
    pub async fn get_current_orderbook(&self, tickers: &[&str]) -> RestResult<Value> {
        let code = pair(tickers)?.code();
        let query = query_string(&[("currencyPairCode", code.as_str())])?;

        let body = self.get(ORDER_BOOK_PATH, &query).await?;
        decode(&body)
    }

    /// Get recent public trades
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    /// * `page_size` - Number of trades to return (default 50)
    #[instrument(skip(self))]
    pub async fn get_current_txs(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        let code = pair(tickers)?.code();
        let size = super::page_size(page_size)?.to_string();
        let query = query_string(&[
            ("currencyPairCode", code.as_str()),
            ("pageSize", size.as_str()),
        ])?;

        let body = self.get(DEALS_PATH, &query).await?;
        decode(&body)
    }

    /// Get the full ticker, including best bid and ask
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, tickers: &[&str]) -> RestResult<Ticker> {
        let code = pair(tickers)?.code();
        let query = query_string(&[("currencyPairCode", code.as_str())])?;

        let body = self.get(TICKERS_PATH, &query).await?;
        decode(&body)
    }

    /// Get the last traded price
    ///
    /// Best bid and ask from the same payload are discarded; use
    /// [`get_ticker`](Self::get_ticker) to keep them.
    #[instrument(skip(self))]
    pub async fn get_last_price(&self, tickers: &[&str]) -> RestResult<Decimal> {
        Ok(self.get_ticker(tickers).await?.price)
    }
}
