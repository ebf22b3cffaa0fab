use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::payments::{
        CompletePaymentRequest, CreatePaymentIntentRequest, CreatePaymentIntentResponse,
        EnrollmentOutcome, PaymentList,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Selection,
    response::ApiResponse,
    services::{payment_service, selection_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/dashboard/payment/{id}", get(get_selection_for_payment))
        .route("/payment", post(complete_payment))
        .route("/payment/{email}", get(payment_history))
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Processor charge-intent secret", body = CreatePaymentIntentResponse),
        (status = 400, description = "Invalid price"),
        (status = 402, description = "Processor declined"),
        (status = 502, description = "Processor unavailable"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> AppResult<Json<CreatePaymentIntentResponse>> {
    let resp = payment_service::create_payment_intent(&state.stripe, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/dashboard/payment/{id}",
    params(
        ("id" = Uuid, Path, description = "Selection ID")
    ),
    responses(
        (status = 200, description = "The selection being paid for", body = ApiResponse<Selection>),
        (status = 404, description = "Selection not found"),
    ),
    tag = "Payments"
)]
pub async fn get_selection_for_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Selection>>> {
    let resp = selection_service::get(&state.pool, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/payment",
    request_body = CompletePaymentRequest,
    responses(
        (status = 200, description = "Record the payment and retire the selection", body = ApiResponse<EnrollmentOutcome>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn complete_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CompletePaymentRequest>,
) -> AppResult<Json<ApiResponse<EnrollmentOutcome>>> {
    let resp = payment_service::complete_enrollment(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/payment/{email}",
    params(
        ("email" = String, Path, description = "Student email")
    ),
    responses(
        (status = 200, description = "A student's payment history", body = ApiResponse<PaymentList>)
    ),
    tag = "Payments"
)]
pub async fn payment_history(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<PaymentList>>> {
    let resp = payment_service::list_for_student(&state.pool, &email).await?;
    Ok(Json(resp))
}
