//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use super::pair;
use crate::client::{sign_request, HttpContext};
use crate::error::{RestError, RestResult};
use crate::types::{OrderSpec, PlaceOrderRequest};
use c3_auth::Credentials;
use c3_types::PriceMode;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

const ORDERS_PATH: &str = "/api/orders";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    http: &'a HttpContext,
    credentials: &'a Credentials,
    price_mode: PriceMode,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(
        http: &'a HttpContext,
        credentials: &'a Credentials,
        price_mode: PriceMode,
    ) -> Self {
        Self {
            http,
            credentials,
            price_mode,
        }
    }

    /// Place a limit order
    ///
    /// The body is serialized once as compact JSON; those exact bytes are
    /// signed and sent.
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    /// * `spec` - Side, amount and price
    ///
    /// # Returns
    /// Raw response body
    #[instrument(skip(self, spec), fields(side = %spec.side, amount = %spec.amount, price = %spec.price))]
    pub async fn place_order(&self, tickers: &[&str], spec: &OrderSpec) -> RestResult<String> {
        let request = PlaceOrderRequest::new(pair(tickers)?, spec, self.price_mode)?;
        let body = request.to_json()?;
        let url = self.http.url(ORDERS_PATH, "");

        let builder = self
            .http
            .client()
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        let builder = sign_request(builder, self.credentials, &url, Some(&body))?;

        debug!(pair = %request.currency_pair_code, "Placing order");

        self.http.send(builder.body(body)).await
    }

    /// Cancel an order by ID
    ///
    /// Signed over the public key and the full DELETE URL, including the
    /// `/{order_id}` suffix.
    ///
    /// # Returns
    /// Raw response body
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        validate_order_id(order_id)?;

        let url = self.http.url(ORDERS_PATH, &format!("/{}", order_id));
        let builder = sign_request(self.http.client().delete(&url), self.credentials, &url, None)?;

        debug!("Cancelling order {}", order_id);

        self.http.send(builder).await
    }
}

/// Order IDs become a path segment and part of the signed message
///
/// Only ASCII alphanumerics, `_` and `-` pass, so the segment is sent
/// exactly as signed: no dot segments, escapes or percent-encoding.
fn validate_order_id(order_id: &str) -> RestResult<()> {
    if order_id.is_empty() {
        return Err(RestError::InvalidArgument(
            "order id must not be empty".to_string(),
        ));
    }
    if !order_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
    {
        return Err(RestError::InvalidArgument(format!(
            "order id is not a valid path segment: {:?}",
            order_id
        )));
    }
    Ok(())
}
