//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{Balance, OrderSpec, Ticker};
use c3_auth::{Credentials, RequestSigner};
use c3_types::PriceMode;
use reqwest::{Client, RequestBuilder, Url};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.c3.exchange";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// C3 REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap
/// and clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use c3_rest::{C3RestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = C3RestClient::new()?;
///     let price = client.get_last_price(&["btc", "usdt"]).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = C3RestClient::with_credentials(creds)?;
///     let balances = auth_client.get_current_balances(&["btc", "usdt"]).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct C3RestClient {
    http: HttpContext,
    credentials: Option<Credentials>,
    price_mode: PriceMode,
}

impl C3RestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| RestError::Config(format!("invalid base URL {:?}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RestError::Config(format!(
                "base URL must be http(s): {:?}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|e| RestError::Config(format!("failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, "Created C3 REST client");

        Ok(Self {
            http: HttpContext { client, base_url },
            credentials: config.credentials,
            price_mode: config.price_mode,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http)
    }

    /// Get the current order book for a pair
    pub async fn get_current_orderbook(&self, tickers: &[&str]) -> RestResult<Value> {
        self.market().get_current_orderbook(tickers).await
    }

    /// Get recent public trades for a pair
    ///
    /// # Arguments
    /// * `tickers` - `[base, quote]`
    /// * `page_size` - Number of trades (default 50)
    pub async fn get_current_txs(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        self.market().get_current_txs(tickers, page_size).await
    }

    /// Get the last traded price for a pair
    pub async fn get_last_price(&self, tickers: &[&str]) -> RestResult<Decimal> {
        self.market().get_last_price(tickers).await
    }

    /// Get the full ticker for a pair, including best bid and ask
    pub async fn get_ticker(&self, tickers: &[&str]) -> RestResult<Ticker> {
        self.market().get_ticker(tickers).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(&self.http, creds))
    }

    /// Get wallet balances for the given tickers
    pub async fn get_current_balances(&self, tickers: &[&str]) -> RestResult<Vec<Balance>> {
        self.account()?.get_current_balances(tickers).await
    }

    /// Get active orders for a pair
    pub async fn get_current_orders(&self, tickers: &[&str]) -> RestResult<Value> {
        self.account()?.get_current_orders(tickers).await
    }

    /// Get order history for a pair
    pub async fn get_orders_history(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        self.account()?.get_orders_history(tickers, page_size).await
    }

    /// Get the user's deal history for a pair
    ///
    /// The exchange can take several seconds to answer this one.
    pub async fn get_txs_history(
        &self,
        tickers: &[&str],
        page_size: Option<u32>,
    ) -> RestResult<Value> {
        self.account()?.get_txs_history(tickers, page_size).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(&self.http, creds, self.price_mode))
    }

    /// Place a limit order
    pub async fn place_order(&self, tickers: &[&str], spec: &OrderSpec) -> RestResult<String> {
        self.trading()?.place_order(tickers, spec).await
    }

    /// Cancel an order by ID
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        self.trading()?.cancel_order(order_id).await
    }
}

impl std::fmt::Debug for C3RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("C3RestClient")
            .field("base_url", &self.http.base_url)
            .field("has_credentials", &self.has_credentials())
            .field("price_mode", &self.price_mode)
            .finish()
    }
}

const DEFAULT_USER_AGENT: &str = concat!("c3-rest/", env!("CARGO_PKG_VERSION"));

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Scheme and host requests go to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Place-order price encoding
    pub price_mode: PriceMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: None,
            price_mode: PriceMode::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL (e.g., a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout
    ///
    /// History endpoints can take several seconds server-side.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set place-order price encoding
    pub fn with_price_mode(mut self, price_mode: PriceMode) -> Self {
        self.price_mode = price_mode;
        self
    }
}

// ============================================================================
// Shared request plumbing
// ============================================================================

/// HTTP client and base URL shared by the endpoint groups
#[derive(Debug, Clone)]
pub(crate) struct HttpContext {
    client: Client,
    base_url: String,
}

impl HttpContext {
    /// Full request URL for a path and an already-encoded query string
    pub(crate) fn url(&self, path: &str, query: &str) -> String {
        format!("{}{}{}", self.base_url, path, query)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Send a request and return the body of a 2xx response
    pub(crate) async fn send(&self, request: RequestBuilder) -> RestResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Request rejected by exchange");
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Attach `API-PublicKey` / `API-Signature` for a request
pub(crate) fn sign_request(
    request: RequestBuilder,
    credentials: &Credentials,
    url: &str,
    payload: Option<&str>,
) -> RestResult<RequestBuilder> {
    let headers = RequestSigner::new(credentials).sign(url, payload)?;
    Ok(headers
        .iter()
        .fold(request, |request, (name, value)| request.header(name, value)))
}

/// Parse a JSON response body
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> RestResult<T> {
    serde_json::from_str(body).map_err(|e| RestError::MalformedResponse(e.to_string()))
}
