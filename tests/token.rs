use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use dance_academy_api::{
    dto::auth::{Claims, IdentityRequest},
    error::AppError,
    middleware::auth::parse_bearer,
    services::token_service::{decode_token, issue_token, sign_claims},
};

const SECRET: &str = "test-secret";

fn identity(email: &str) -> IdentityRequest {
    IdentityRequest {
        email: email.to_string(),
        name: None,
        photo: None,
        role: None,
    }
}

#[test]
fn issued_token_round_trips_email_claim() {
    let token = issue_token(&identity("dancer@example.com"), SECRET).unwrap();
    let claims = decode_token(&token, SECRET).expect("token should verify");
    assert_eq!(claims.email, "dancer@example.com");

    let expires_in = claims.exp as i64 - Utc::now().timestamp();
    assert!(
        expires_in > 3500 && expires_in <= 3600,
        "expected ~1h expiry, got {expires_in}s"
    );
}

#[test]
fn expired_token_is_rejected() {
    // Past the default 60s validation leeway.
    let exp = (Utc::now() - Duration::hours(2)).timestamp() as usize;
    let token = sign_claims(
        &Claims {
            email: "dancer@example.com".to_string(),
            exp,
        },
        SECRET,
    )
    .unwrap();

    assert!(decode_token(&token, SECRET).is_err());
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let token = issue_token(&identity("dancer@example.com"), "other-secret").unwrap();
    assert!(decode_token(&token, SECRET).is_err());
}

#[test]
fn garbage_token_is_rejected() {
    assert!(decode_token("not.a.token", SECRET).is_err());
}

// The 401 body is a wire contract with existing clients; every auth failure
// must produce this exact payload, misspelling included.
#[tokio::test]
async fn auth_failure_serializes_the_legacy_401_body() {
    let response = AppError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({ "error": true, "message": "Unorthorized Access" })
    );
}

#[test]
fn bearer_parsing() {
    assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    assert_eq!(parse_bearer("Bearer   abc  "), Some("abc"));
    assert_eq!(parse_bearer("Bearer "), None);
    assert_eq!(parse_bearer("Basic abc"), None);
    assert_eq!(parse_bearer("abc.def.ghi"), None);
}
