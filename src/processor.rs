//! Stripe REST API client.
//!
//! Only the payment-intent endpoint is used: the server hands the intent's
//! client secret to the browser and Stripe.js captures the charge there.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use thiserror::Error;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Error)]
pub enum StripeError {
    /// Transport failure, including the request timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe accepted the connection but rejected the request.
    #[error("Stripe API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A processor-side authorized-but-not-captured payment.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    base_url: String,
}

impl StripeClient {
    pub fn new(secret_key: &str) -> Result<Self, StripeError> {
        Self::with_base_url(secret_key, STRIPE_API_BASE)
    }

    /// `base_url` override exists so tests can point the client at a stub.
    pub fn with_base_url(secret_key: &str, base_url: &str) -> Result<Self, StripeError> {
        if secret_key.is_empty() {
            return Err(StripeError::Config("secret key is empty".into()));
        }

        let mut headers = HeaderMap::new();
        let auth_val = HeaderValue::from_str(&format!("Bearer {}", secret_key))
            .map_err(|_| StripeError::Config("Invalid secret key format".into()))?;
        headers.insert(AUTHORIZATION, auth_val);

        // The original server had no bound here and could hang forever on a
        // stuck processor call.
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Request a card payment intent for `amount` minor units.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, StripeError> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let resp = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .form(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = resp.json().await?;
        Ok(PaymentIntent {
            id: body.id,
            client_secret: body.client_secret,
        })
    }
}

#[derive(Deserialize)]
struct IntentBody {
    id: String,
    client_secret: String,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}
