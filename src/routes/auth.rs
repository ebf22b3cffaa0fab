use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{IdentityRequest, TokenResponse},
    error::AppResult,
    services::token_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_token))
}

#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IdentityRequest,
    responses(
        (status = 200, description = "Issue a one-hour bearer token", body = TokenResponse)
    ),
    tag = "Auth"
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<IdentityRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = token_service::issue_token(&payload, &state.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}
