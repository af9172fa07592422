//! Order placement and cancellation tests against a mock exchange

mod common;

use common::*;
use c3_rest::{OrderSpec, PriceMode, RestError};
use rust_decimal_macros::dec;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SELL_BODY: &str =
    r#"{"isBid":false,"side":"sell","currencyPairCode":"BTC_USDT","amount":0.001,"price":45000}"#;

#[tokio::test]
async fn test_place_sell_order_signs_sent_body() {
    let server = MockServer::start().await;
    let signature = expected_signature(&server, "/api/orders", SELL_BODY);

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header("Content-Type", "application/json"))
        .and(header("API-PublicKey", PUBLIC_KEY))
        .and(header("API-Signature", signature.as_str()))
        .and(body_string(SELL_BODY))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"9001"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let spec = OrderSpec::parse("sell", "0.001", "45000").unwrap();
    let response = auth_client(&server)
        .place_order(&["btc", "usdt"], &spec)
        .await
        .expect("place order");

    assert_eq!(response, r#"{"id":"9001"}"#);
}

#[tokio::test]
async fn test_place_order_truncates_price_by_default() {
    let server = MockServer::start().await;
    let body = r#"{"isBid":true,"side":"buy","currencyPairCode":"ETH_USDT","amount":1.5,"price":2100}"#;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let spec = OrderSpec::buy(dec!(1.5), dec!(2100.75));
    let response = auth_client(&server)
        .place_order(&["ETH", "usdt"], &spec)
        .await
        .expect("place order");
    assert_eq!(response, "ok");
}

#[tokio::test]
async fn test_place_order_exact_price_mode() {
    let server = MockServer::start().await;
    let body = r#"{"isBid":true,"side":"buy","currencyPairCode":"ETH_USDT","amount":1.5,"price":2100.75}"#;
    let signature = expected_signature(&server, "/api/orders", body);

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header("API-Signature", signature.as_str()))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let spec = OrderSpec::buy(dec!(1.5), dec!(2100.75));
    auth_client_with_mode(&server, PriceMode::Exact)
        .place_order(&["eth", "usdt"], &spec)
        .await
        .expect("place order");
}

#[tokio::test]
async fn test_place_order_rejects_invalid_input_offline() {
    let server = MockServer::start().await;
    let client = auth_client(&server);

    let zero_amount = OrderSpec::sell(dec!(0), dec!(45000));
    let result = client.place_order(&["btc", "usdt"], &zero_amount).await;
    assert!(matches!(result, Err(RestError::InvalidArgument(_))));

    let sub_unit_price = OrderSpec::buy(dec!(1), dec!(0.5));
    let result = client.place_order(&["btc", "usdt"], &sub_unit_price).await;
    assert!(matches!(result, Err(RestError::InvalidArgument(_))));

    let spec = OrderSpec::sell(dec!(0.001), dec!(45000));
    let result = client.place_order(&["btc"], &spec).await;
    assert!(matches!(result, Err(RestError::InvalidArgument(_))));

    assert_no_requests(&server).await;
}

#[tokio::test]
async fn test_place_order_rejection_returns_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"message":"insufficient funds"}"#),
        )
        .mount(&server)
        .await;

    let spec = OrderSpec::sell(dec!(0.001), dec!(45000));
    let err = auth_client(&server)
        .place_order(&["btc", "usdt"], &spec)
        .await
        .expect_err("400 must fail");

    assert_eq!(err.status(), Some(400));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_cancel_order_signs_full_url() {
    let server = MockServer::start().await;
    let signature = expected_signature(&server, "/api/orders/42", "");

    Mock::given(method("DELETE"))
        .and(path("/api/orders/42"))
        .and(header("API-PublicKey", PUBLIC_KEY))
        .and(header("API-Signature", signature.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"cancelled":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = auth_client(&server)
        .cancel_order("42")
        .await
        .expect("cancel order");

    assert_eq!(response, r#"{"cancelled":true}"#);
}

#[tokio::test]
async fn test_cancel_order_rejects_bad_ids_offline() {
    let server = MockServer::start().await;
    let client = auth_client(&server);

    for id in [
        "",
        "4 2",
        "../wallets/balances",
        "42?force=1",
        ".",
        "..",
        "%2e%2e",
        "ордер",
    ] {
        let result = client.cancel_order(id).await;
        assert!(
            matches!(result, Err(RestError::InvalidArgument(_))),
            "id {:?} should be rejected",
            id
        );
    }

    assert_no_requests(&server).await;
}

#[tokio::test]
async fn test_trading_requires_credentials() {
    let server = MockServer::start().await;
    let client = public_client(&server);

    let spec = OrderSpec::sell(dec!(0.001), dec!(45000));
    let result = client.place_order(&["btc", "usdt"], &spec).await;
    assert!(matches!(result, Err(RestError::AuthRequired)));

    let result = client.cancel_order("42").await;
    assert!(matches!(result, Err(RestError::AuthRequired)));

    assert_no_requests(&server).await;
}
