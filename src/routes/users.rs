use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use uuid::Uuid;

use crate::{
    dto::users::{AdminCheckResponse, CreateUserRequest, InstructorCheckResponse, UserList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::User,
    response::{ApiResponse, Meta},
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", axum::routing::post(create_user).get(list_users))
        .route("/instructors", get(list_instructors))
        // PATCH takes a user id, GET takes an email; axum requires one route
        // entry per path pattern, so both live under the same segment.
        .route("/users/admin/{key}", patch(make_admin).get(check_admin))
        .route(
            "/users/instructor/{key}",
            patch(make_instructor).get(check_instructor),
        )
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Record a user on first sign-in", body = ApiResponse<User>)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::create_if_absent(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List all users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_all(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "Users with the instructor role", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_instructors(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_instructors(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Grant the admin role", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Users"
)]
pub async fn make_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let modified = user_service::set_role(&state.pool, id, "admin").await?;
    Ok(Json(ApiResponse::success(
        "Role updated",
        serde_json::json!({ "modifiedCount": modified }),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Grant the instructor role", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Users"
)]
pub async fn make_instructor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let modified = user_service::set_role(&state.pool, id, "instructor").await?;
    Ok(Json(ApiResponse::success(
        "Role updated",
        serde_json::json!({ "modifiedCount": modified }),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Email the caller asks about")
    ),
    responses(
        (status = 200, description = "Whether the requester is that admin", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn check_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminCheckResponse>> {
    let admin = user_service::check_role(&state.pool, &user.email, &email, "admin").await?;
    Ok(Json(AdminCheckResponse { admin }))
}

#[utoipa::path(
    get,
    path = "/users/instructor/{email}",
    params(
        ("email" = String, Path, description = "Email the caller asks about")
    ),
    responses(
        (status = 200, description = "Whether the requester is that instructor", body = InstructorCheckResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn check_instructor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> AppResult<Json<InstructorCheckResponse>> {
    let instructor =
        user_service::check_role(&state.pool, &user.email, &email, "instructor").await?;
    Ok(Json(InstructorCheckResponse { instructor }))
}
