use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::classes::{ClassList, ProposeClassRequest, UpdateClassRequest, UpdateOutcome},
    error::{AppError, AppResult},
    models::DanceClass,
    response::{ApiResponse, Meta},
};

/// Insert a new class. Status is forced to Pending server-side; only an
/// admin approval flips it.
pub async fn propose(
    pool: &DbPool,
    payload: ProposeClassRequest,
) -> AppResult<ApiResponse<DanceClass>> {
    let id = Uuid::new_v4();
    let class = sqlx::query_as::<_, DanceClass>(
        r#"
        INSERT INTO classes (id, name, image, instructor_name, instructor_email, price, available_seats, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'Pending')
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.image)
    .bind(payload.instructor_name)
    .bind(payload.instructor_email.as_str())
    .bind(payload.price)
    .bind(payload.available_seats)
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(payload.instructor_email.as_str()),
        "class_propose",
        Some("classes"),
        Some(serde_json::json!({ "class_id": class.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Class created", class, None))
}

/// Set a class Approved. A plain UPDATE, so re-approving is a no-op with the
/// same terminal state.
pub async fn approve(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<UpdateOutcome>> {
    let result = sqlx::query("UPDATE classes SET status = 'Approved' WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if let Err(err) = log_audit(
        pool,
        None,
        "class_approve",
        Some("classes"),
        Some(serde_json::json!({ "class_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Class approved",
        UpdateOutcome {
            modified_count: result.rows_affected(),
        },
        Some(Meta::empty()),
    ))
}

/// All classes, every status. The admin dashboard reads pending classes from
/// this same listing, so no approval filter is applied.
pub async fn list_all(pool: &DbPool) -> AppResult<ApiResponse<ClassList>> {
    let items = sqlx::query_as::<_, DanceClass>("SELECT * FROM classes ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Classes",
        ClassList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn list_by_instructor(pool: &DbPool, email: &str) -> AppResult<ApiResponse<ClassList>> {
    let items = sqlx::query_as::<_, DanceClass>(
        "SELECT * FROM classes WHERE instructor_email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Classes",
        ClassList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<DanceClass>> {
    let class = sqlx::query_as::<_, DanceClass>("SELECT * FROM classes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let class = match class {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success("Class", class, None))
}

/// Replace the four instructor-editable fields; status and instructor email
/// stay untouched.
pub async fn edit_fields(
    pool: &DbPool,
    id: Uuid,
    payload: UpdateClassRequest,
) -> AppResult<ApiResponse<UpdateOutcome>> {
    let result = sqlx::query(
        r#"
        UPDATE classes
        SET name = $2, image = $3, price = $4, available_seats = $5
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.image)
    .bind(payload.price)
    .bind(payload.available_seats)
    .execute(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        None,
        "class_update",
        Some("classes"),
        Some(serde_json::json!({ "class_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Class updated",
        UpdateOutcome {
            modified_count: result.rows_affected(),
        },
        Some(Meta::empty()),
    ))
}
