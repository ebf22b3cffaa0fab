use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use dance_academy_api::{
    error::AppError,
    processor::{StripeClient, StripeError},
};

/// One-route stub standing in for the Stripe API.
async fn spawn_stub(status: StatusCode, body: serde_json::Value) -> SocketAddr {
    let app = Router::new().route(
        "/v1/payment_intents",
        post(move || async move { (status, Json(body.clone())) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}

#[tokio::test]
async fn successful_intent_returns_client_secret() {
    let addr = spawn_stub(
        StatusCode::OK,
        serde_json::json!({ "id": "pi_123", "client_secret": "pi_123_secret_abc" }),
    )
    .await;

    let client = StripeClient::with_base_url("sk_test_key", &format!("http://{addr}")).unwrap();
    let intent = client
        .create_payment_intent(5000, "usd")
        .await
        .expect("intent");
    assert_eq!(intent.id, "pi_123");
    assert_eq!(intent.client_secret, "pi_123_secret_abc");
}

#[tokio::test]
async fn processor_rejection_maps_to_402() {
    let addr = spawn_stub(
        StatusCode::PAYMENT_REQUIRED,
        serde_json::json!({ "error": { "message": "Your card was declined." } }),
    )
    .await;

    let client = StripeClient::with_base_url("sk_test_key", &format!("http://{addr}")).unwrap();
    let err = client
        .create_payment_intent(5000, "usd")
        .await
        .expect_err("stub rejects the charge");

    match &err {
        StripeError::Api { status, message } => {
            assert_eq!(*status, 402);
            assert_eq!(message, "Your card was declined.");
        }
        other => panic!("expected API error, got {other:?}"),
    }

    let app_err = AppError::from(err);
    assert!(matches!(app_err, AppError::ProcessorDeclined(_)));
    assert_eq!(
        app_err.into_response().status(),
        StatusCode::PAYMENT_REQUIRED
    );
}

// Transport failures (connection refused, timeout) share the Http variant and
// surface as processor-unavailable rather than a decline.
#[tokio::test]
async fn unreachable_processor_maps_to_502() {
    // Grab a free port, then release it so the connection is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let client = StripeClient::with_base_url("sk_test_key", &format!("http://{addr}")).unwrap();
    let err = client
        .create_payment_intent(5000, "usd")
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, StripeError::Http(_)));

    let app_err = AppError::from(err);
    assert!(matches!(app_err, AppError::ProcessorUnavailable(_)));
    assert_eq!(app_err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn empty_secret_key_is_a_config_error() {
    let err = StripeClient::new("").expect_err("empty key must be rejected");
    assert!(matches!(err, StripeError::Config(_)));

    let app_err = AppError::from(err);
    assert_eq!(
        app_err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
