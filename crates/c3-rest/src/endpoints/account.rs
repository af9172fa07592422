//! Private account endpoints
//!
//! These endpoints require authentication.

use super::{pair, query_string};
use crate::client::{decode, sign_request, HttpContext};
use crate::error::RestResult;
use crate::types::{Balance, BalancesResponse};
use c3_auth::Credentials;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, instrument};

const BALANCES_PATH: &str = "/api/wallets/balances";
const USER_ORDERS_PATH: &str = "/api/user/orders";
const USER_DEALS_PATH: &str = "/api/user/deals";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    http: &'a HttpContext,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(http: &'a HttpContext, credentials: &'a Credentials) -> Self {
        Self { http, credentials }
    }

    /// Make an authenticated GET request
    ///
    /// The query string is both sent and signed as part of the URL.
    async fn get(&self, path: &str, query: &str) -> RestResult<String> {
        let url = self.http.url(path, query);
        let request = sign_request(self.http.client().get(&url), self.credentials, &url, None)?;

        debug!("Making authenticated request to {}", path);

        self.http.send(request).await
    }

    /// Get wallet balances, filtered to the given tickers
    ///
    /// Matching is case-insensitive. Tickers the wallet doesn't hold are
    /// simply absent from the result.
    ///
    /// # Arguments
    /// * `tickers` - Currency codes to keep (e.g., `["btc", "usdt"]`)
    #[instrument(skip(self))]
    pub async fn get_current_balances(&self, tickers: &[&str]) -> RestResult<Vec<Balance>> {
        let wanted: HashSet<String> = tickers.iter().map(|t| t.to_uppercase()).collect();

        let body = self.get(BALANCES_PATH, "").await?;
        let response: BalancesResponse = decode(&body)?;

        let balances: Vec<Balance> = response
            .balances
            .into_iter()
            .filter(|b| wanted.contains(&b.currency_code.to_uppercase()))
            .collect();

        debug!("Kept {} of the returned balances", balances.len());
        Ok(balances)
    }

    /// Get active orders for a pair
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    #[instrument(skip(self))]
    pub async fn get_current_orders(&self, tickers: &[&str]) -> RestResult<Value> {
        let code = pair(tickers)?.code();
        let query = query_string(&[
            ("currencyPairCode", code.as_str()),
            ("status", "active"),
        ])?;

        let body = self.get(USER_ORDERS_PATH, &query).await?;
        decode(&body)
    }

    /// Get order history for a pair, all statuses
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    /// * `page_size` - Number of orders to return (default 50)
    #[instrument(skip(self))]
    pub async fn get_orders_history(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        self.paged(USER_ORDERS_PATH, tickers, page_size).await
    }

    /// Get the user's deal history for a pair
    ///
    /// Can take 3-4 seconds server-side; size `ClientConfig::timeout`
    /// accordingly.
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    /// * `page_size` - Number of deals to return (default 50)
    #[instrument(skip(self))]
    pub async fn get_txs_history(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        self.paged(USER_DEALS_PATH, tickers, page_size).await
    }

    async fn paged(
        &self,
        path: &str,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        let code = pair(tickers)?.code();
        let size = super::page_size(page_size)?.to_string();
        let query = query_string(&[
            ("currencyPairCode", code.as_str()),
            ("pageSize", size.as_str()),
        ])?;

        let body = self.get(path, &query).await?;
        decode(&body)
    }
}
