use axum::{
    extract::{FromRef, FromRequestParts},
    http::header,
};

use crate::{error::AppError, services::token_service, state::AppState};

/// Verified claims of the requesting user.
///
/// Every failure mode (missing header, wrong scheme, bad signature, expired
/// token) collapses into the same `Unauthorized` rejection so the response
/// never reveals which check failed.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::Unauthorized)?;
        let token = parse_bearer(auth_str).ok_or(AppError::Unauthorized)?;

        let claims = token_service::decode_token(token, &state.jwt_secret)
            .map_err(|_| AppError::Unauthorized)?;

        Ok(AuthUser {
            email: claims.email,
        })
    }
}
