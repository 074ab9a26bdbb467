use rust_decimal::Decimal;
use wiremock::matchers::{header_exists, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yobit_api_client::error::YobitError;
use yobit_api_client::rest::YobitRestClient;
use yobit_api_client::types::{PublicResponse, TradeSide};

fn build_public_client(server: &MockServer) -> YobitRestClient {
    YobitRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_info() {
    let server = MockServer::start().await;
    let response = r#"{
        "server_time": 1700000000,
        "pairs": {
            "ltc_btc": {
                "decimal_places": 8,
                "min_price": 0.00000001,
                "max_price": 10000,
                "min_amount": 0.0001,
                "hidden": 0,
                "fee": 0.2
            }
        }
    }"#;

    Mock::given(method("GET"))
        .and(path("/api/3/info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(response, "application/json"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let info = client.get_info().await.unwrap().into_result().unwrap();
    assert_eq!(info.server_time, 1_700_000_000);
    assert_eq!(info.pairs["ltc_btc"].decimal_places, 8);
    assert_eq!(info.pairs["ltc_btc"].min_price, Decimal::new(1, 8));
    assert_eq!(info.pairs["ltc_btc"].fee, Decimal::new(2, 1));
}

#[tokio::test]
async fn test_get_ticker_joins_and_lowercases_pairs() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "btc_usd": {
            "high": 30500.5, "low": 29000, "avg": 29750.25, "vol": 1200000,
            "vol_cur": 40.5, "last": 30000, "buy": 29990, "sell": 30010,
            "updated": 1_700_000_000
        },
        "ltc_btc": {
            "high": 0.003, "low": 0.0025, "avg": 0.00275, "vol": 10,
            "vol_cur": 4000, "last": 0.0028, "buy": 0.0027, "sell": 0.0029,
            "updated": 1_700_000_001
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/3/ticker/btc_usd-ltc_btc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client
        .get_ticker(&["BTC_USD", "LTC_BTC"])
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(ticker.len(), 2);
    assert_eq!(ticker["btc_usd"].last, Decimal::new(30000, 0));
    assert_eq!(ticker["ltc_btc"].updated, 1_700_000_001);
}

#[tokio::test]
async fn test_get_depth_with_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "eth_btc": {
            "asks": [[0.05, 1.5], [0.051, 2]],
            "bids": [[0.049, 3]]
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/3/depth/eth_btc"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let depth = client
        .get_depth("ETH_BTC", Some(2))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let book = &depth["eth_btc"];
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.asks[1].price(), Decimal::new(51, 3));
    assert_eq!(book.bids[0].amount(), Decimal::new(3, 0));
}

#[tokio::test]
async fn test_get_trades_without_limit() {
    let server = MockServer::start().await;
    let response = r#"{
        "doge_btc": [
            { "type": "ask", "price": 0.0000002, "amount": 1000, "tid": 501, "timestamp": 1700000000 },
            { "type": "bid", "price": 0.0000001, "amount": 2500, "tid": 500, "timestamp": 1699999999 }
        ]
    }"#;

    Mock::given(method("GET"))
        .and(path("/api/3/trades/doge_btc"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(response, "application/json"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client
        .get_trades("doge_btc", None)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(trades["doge_btc"].len(), 2);
    assert_eq!(trades["doge_btc"][0].side, TradeSide::Ask);
    assert_eq!(trades["doge_btc"][1].tid, 500);
    assert_eq!(trades["doge_btc"][0].price, Decimal::new(2, 7));
}

#[tokio::test]
async fn test_public_failure_passed_through() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": 0,
        "error": "Invalid pair name: xxx_yyy"
    });

    Mock::given(method("GET"))
        .and(path("/api/3/ticker/xxx_yyy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("xxx_yyy").await.unwrap();

    match ticker {
        PublicResponse::Failure(failure) => {
            assert_eq!(failure.success, 0);
            assert_eq!(failure.error, "Invalid pair name: xxx_yyy");
        }
        PublicResponse::Data(_) => panic!("expected failure payload"),
    }
}

#[tokio::test]
async fn test_public_requests_carry_no_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/ticker/btc_usd"))
        .and(header_exists("sign"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3/ticker/btc_usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = YobitRestClient::builder()
        .base_url(server.uri())
        .credentials(yobit_api_client::auth::Credentials::new("k", "s"))
        .initial_nonce(1)
        .build()
        .unwrap();

    let ticker = client.get_ticker("btc_usd").await.unwrap();
    assert!(ticker.into_result().unwrap().is_empty());
    assert_eq!(client.nonce_counter().current().await, 1);
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>DDoS protection</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, YobitError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/info"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    match client.get_info().await.unwrap_err() {
        YobitError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_mismatched_json_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "server_time": "soon" })),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    match client.get_info().await.unwrap_err() {
        YobitError::InvalidResponse(message) => assert!(message.contains("server_time")),
        other => panic!("unexpected error: {other:?}"),
    }
}
