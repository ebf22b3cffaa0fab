use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Payment;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentIntentRequest {
    /// Major currency units; converted to cents before reaching Stripe.
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletePaymentRequest {
    pub email: String,
    /// The Selection id to retire, kept under the original's `classId` name.
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub amount: f64,
    pub transaction_id: String,
}

/// Both effects of the enrollment workflow, reported separately so callers
/// can detect a partial failure between the insert and the delete.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentOutcome {
    pub inserted_count: u64,
    pub deleted_count: u64,
    /// True when the transaction reference was already recorded (client retry).
    pub duplicate: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentList {
    #[schema(value_type = Vec<Payment>)]
    pub items: Vec<Payment>,
}
