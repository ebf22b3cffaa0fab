use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::selections::{DeleteOutcome, SelectClassRequest, SelectionList},
    error::{AppError, AppResult},
    models::Selection,
    response::{ApiResponse, Meta},
};

/// Insert a cart entry. No duplicate guard: selecting the same class twice
/// creates two independently payable rows, matching the original behavior.
pub async fn select(
    pool: &DbPool,
    payload: SelectClassRequest,
) -> AppResult<ApiResponse<Selection>> {
    let id = Uuid::new_v4();
    let selection = sqlx::query_as::<_, Selection>(
        r#"
        INSERT INTO selected_classes (id, email, class_id, class_name, image, price)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.email)
    .bind(payload.class_id)
    .bind(payload.class_name)
    .bind(payload.image)
    .bind(payload.price)
    .fetch_one(pool)
    .await?;

    Ok(ApiResponse::success("Class selected", selection, None))
}

pub async fn list_for_student(pool: &DbPool, email: &str) -> AppResult<ApiResponse<SelectionList>> {
    let items = sqlx::query_as::<_, Selection>(
        "SELECT * FROM selected_classes WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Selected classes",
        SelectionList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<Selection>> {
    let selection = sqlx::query_as::<_, Selection>("SELECT * FROM selected_classes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let selection = match selection {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success("Selected class", selection, None))
}

/// Remove a cart entry. A missing id is a zero-count outcome, not an error.
pub async fn remove(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<DeleteOutcome>> {
    let result = sqlx::query("DELETE FROM selected_classes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(ApiResponse::success(
        "Selection removed",
        DeleteOutcome {
            deleted_count: result.rows_affected(),
        },
        Some(Meta::empty()),
    ))
}
