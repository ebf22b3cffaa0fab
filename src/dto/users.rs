use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}

/// Bare legacy shape: `{"admin": false}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Bare legacy shape: `{"instructor": false}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}
