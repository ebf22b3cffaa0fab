use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity payload the client submits after sign-in; only the email is
/// carried into the token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IdentityRequest {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
}
