//! HTTP rate provider tests against a local server.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use nisab_rates::{HttpRateProvider, RateFetchError, RateProvider};
use nisab_shared::types::CurrencyCode;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/latest")
}

fn provider(base_url: &str) -> HttpRateProvider {
    HttpRateProvider::new(base_url, Duration::from_secs(2))
}

#[tokio::test]
async fn test_fetch_latest_parses_rates() {
    let app = Router::new().route(
        "/latest/USD",
        get(|| async {
            r#"{"base":"USD","date":"2025-03-01","rates":{"USD":1,"SAR":3.75,"EUR":0.5,"PKR":280}}"#
        }),
    );
    let url = serve(app).await;

    let table = provider(&url)
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.rate(&CurrencyCode::from_static("SAR")).unwrap(),
        dec!(3.75)
    );
    assert_eq!(
        table.rate(&CurrencyCode::from_static("PKR")).unwrap(),
        dec!(280)
    );
}

#[tokio::test]
async fn test_non_success_status() {
    let app = Router::new().route(
        "/latest/USD",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let url = serve(app).await;

    let err = provider(&url)
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::HttpStatus(503)));
}

#[tokio::test]
async fn test_malformed_body() {
    let app = Router::new().route("/latest/USD", get(|| async { "<html>not json</html>" }));
    let url = serve(app).await;

    let err = provider(&url)
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_missing_rates_object() {
    let app = Router::new().route("/latest/USD", get(|| async { r#"{"result":"error"}"# }));
    let url = serve(app).await;

    let err = provider(&url)
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_negative_rate_is_rejected() {
    let app = Router::new().route(
        "/latest/USD",
        get(|| async { r#"{"rates":{"USD":1,"SAR":-3.75}}"# }),
    );
    let url = serve(app).await;

    let err = provider(&url)
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_timeout() {
    let app = Router::new().route(
        "/latest/USD",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            r#"{"rates":{"USD":1}}"#
        }),
    );
    let url = serve(app).await;

    let err = HttpRateProvider::new(&url, Duration::from_millis(200))
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::Timeout(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider(&format!("http://{addr}/latest"))
        .fetch_latest(&CurrencyCode::usd())
        .await
        .unwrap_err();
    assert!(matches!(err, RateFetchError::Network(_)));
}
