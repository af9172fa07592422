//! Common test utilities and fixtures for integration tests
//!
//! Response bodies are shaped like the exchange's JSON payloads.

#![allow(dead_code)]

use c3_rest::{C3RestClient, ClientConfig, Credentials, PriceMode};
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "test-public-key";
pub const PRIVATE_KEY: &str = "test-private-key";

/// Wallet balances including a currency nobody asks for
pub const BALANCES_RESPONSE: &str = r#"{
    "balances": [
        {"currencyCode": "BTC", "available": 0.5, "reserved": 0.01},
        {"currencyCode": "usdt", "available": 1250.75, "reserved": 0},
        {"currencyCode": "ETH", "available": 3.2, "reserved": 0}
    ]
}"#;

/// Ticker payload with best bid/ask alongside the price
pub const TICKER_RESPONSE: &str = r#"{
    "currencyPairCode": "BTC_USDT",
    "price": 45000.5,
    "bestBid": 44999.0,
    "bestAsk": 45001.0
}"#;

pub const ORDER_BOOK_RESPONSE: &str = r#"{
    "bids": [{"price": 44999.0, "amount": 0.4}, {"price": 44990.0, "amount": 1.1}],
    "asks": [{"price": 45001.0, "amount": 0.2}, {"price": 45010.0, "amount": 0.9}]
}"#;

pub const DEALS_RESPONSE: &str = r#"[
    {"id": 101, "price": 45000.0, "amount": 0.01, "side": "buy"},
    {"id": 100, "price": 44998.0, "amount": 0.02, "side": "sell"}
]"#;

pub const ORDERS_RESPONSE: &str = r#"[
    {"id": "9001", "currencyPairCode": "BTC_USDT", "status": "active", "side": "sell"}
]"#;

pub fn credentials() -> Credentials {
    Credentials::new(PUBLIC_KEY, PRIVATE_KEY).expect("test credentials")
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> C3RestClient {
    C3RestClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client init")
}

/// Authenticated client pointed at the mock server
pub fn auth_client(server: &MockServer) -> C3RestClient {
    auth_client_with_mode(server, PriceMode::Truncate)
}

pub fn auth_client_with_mode(server: &MockServer, price_mode: PriceMode) -> C3RestClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_credentials(credentials())
        .with_price_mode(price_mode);
    C3RestClient::with_config(config).expect("client init")
}

/// Signature the server should see for a given path (plus query) and body
pub fn expected_signature(server: &MockServer, path_and_query: &str, body: &str) -> String {
    let message = format!("{}{}{}{}", PUBLIC_KEY, server.uri(), path_and_query, body);
    credentials().sign(&message).expect("sign")
}

/// Assert the client never reached the server
pub async fn assert_no_requests(server: &MockServer) {
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(
        requests.is_empty(),
        "expected no requests, got {}",
        requests.len()
    );
}
