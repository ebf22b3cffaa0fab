use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::users::{CreateUserRequest, UserList},
    error::AppResult,
    models::User,
    response::{ApiResponse, Meta},
};

/// Create-if-absent. First sign-in records the user; a repeat sign-in with
/// the same email is acknowledged without touching the existing record.
pub async fn create_if_absent(
    pool: &DbPool,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(payload.email.as_str())
        .fetch_optional(pool)
        .await?;

    if exist.is_some() {
        return Ok(ApiResponse {
            message: "user already exists".to_string(),
            data: None,
            meta: None,
        });
    }

    let id = Uuid::new_v4();
    let user: User = sqlx::query_as(
        "INSERT INTO users (id, email, name, photo, role) VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(id)
    .bind(payload.email)
    .bind(payload.name)
    .bind(payload.photo)
    .bind(payload.role)
    .fetch_one(pool)
    .await?;

    Ok(ApiResponse::success("User created", user, None))
}

pub async fn list_all(pool: &DbPool) -> AppResult<ApiResponse<UserList>> {
    let items = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn list_instructors(pool: &DbPool) -> AppResult<ApiResponse<UserList>> {
    let items =
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = 'instructor' ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Instructors",
        UserList { items },
        Some(Meta::total(total)),
    ))
}

/// Promote a user. Idempotent UPDATE; the outcome reports rows affected.
pub async fn set_role(pool: &DbPool, id: Uuid, role: &str) -> AppResult<u64> {
    let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await?;

    if let Err(err) = log_audit(
        pool,
        None,
        "role_update",
        Some("users"),
        Some(json!({ "user_id": id, "role": role })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(result.rows_affected())
}

/// Role gate. The identity mismatch check runs before any lookup so a denial
/// never reveals whether the target user exists; `false` is a normal payload,
/// not an HTTP rejection.
pub async fn check_role(
    pool: &DbPool,
    requester_email: &str,
    target_email: &str,
    role: &str,
) -> AppResult<bool> {
    if requester_email != target_email {
        return Ok(false);
    }

    let row: Option<(Option<String>,)> = sqlx::query_as("SELECT role FROM users WHERE email = $1")
        .bind(target_email)
        .fetch_optional(pool)
        .await?;

    Ok(matches!(row, Some((Some(r),)) if r == role))
}
