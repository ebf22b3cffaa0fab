use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::payments::{
        CompletePaymentRequest, CreatePaymentIntentRequest, CreatePaymentIntentResponse,
        EnrollmentOutcome, PaymentList,
    },
    error::{AppError, AppResult},
    models::Payment,
    processor::StripeClient,
    response::{ApiResponse, Meta},
};

/// Convert a major-unit price to processor minor units.
pub fn to_minor_units(price: f64) -> AppResult<i64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::BadRequest(
            "price must be a positive number".to_string(),
        ));
    }
    Ok((price * 100.0).round() as i64)
}

/// Ask the processor for a charge intent; the browser captures the charge
/// with the returned client secret.
pub async fn create_payment_intent(
    stripe: &StripeClient,
    payload: CreatePaymentIntentRequest,
) -> AppResult<CreatePaymentIntentResponse> {
    let amount = to_minor_units(payload.price)?;
    let intent = stripe.create_payment_intent(amount, "usd").await?;

    Ok(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    })
}

/// Terminal step of enrollment: record the payment, then retire the cart
/// entry referenced by `classId`.
///
/// The two writes are deliberately not wrapped in a transaction; the unique
/// `transaction_id` makes the sequence retry-safe instead. A retry after a
/// crash between the steps inserts nothing but still runs the delete, so the
/// dangling selection is cleaned up rather than double-charged.
pub async fn complete_enrollment(
    pool: &DbPool,
    payload: CompletePaymentRequest,
) -> AppResult<ApiResponse<EnrollmentOutcome>> {
    let id = Uuid::new_v4();
    let insert_result = sqlx::query(
        r#"
        INSERT INTO payments (id, email, class_id, class_name, amount, transaction_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (transaction_id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(payload.email.as_str())
    .bind(payload.class_id)
    .bind(payload.class_name.as_deref())
    .bind(payload.amount)
    .bind(payload.transaction_id.as_str())
    .execute(pool)
    .await?;

    let inserted_count = insert_result.rows_affected();
    let duplicate = inserted_count == 0;

    let delete_result = sqlx::query("DELETE FROM selected_classes WHERE id = $1")
        .bind(payload.class_id)
        .execute(pool)
        .await?;

    if let Err(err) = log_audit(
        pool,
        Some(payload.email.as_str()),
        "enrollment_complete",
        Some("payments"),
        Some(serde_json::json!({
            "selection_id": payload.class_id,
            "transaction_id": payload.transaction_id,
            "duplicate": duplicate,
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let message = if duplicate {
        "Payment already recorded"
    } else {
        "Enrollment completed"
    };

    Ok(ApiResponse::success(
        message,
        EnrollmentOutcome {
            inserted_count,
            deleted_count: delete_result.rows_affected(),
            duplicate,
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_for_student(pool: &DbPool, email: &str) -> AppResult<ApiResponse<PaymentList>> {
    let items = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Payments",
        PaymentList { items },
        Some(Meta::total(total)),
    ))
}
