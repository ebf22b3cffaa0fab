use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::selections::{DeleteOutcome, SelectClassRequest, SelectionList},
    error::AppResult,
    models::Selection,
    response::ApiResponse,
    services::selection_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/selectClasses", post(select_class))
        // "Seclected" is the original route's spelling; kept for client compat.
        .route("/userSeclectedClass/{email}", get(user_selected_classes))
        .route("/deleteSelectedClass/{id}", delete(delete_selected_class))
}

#[utoipa::path(
    post,
    path = "/selectClasses",
    request_body = SelectClassRequest,
    responses(
        (status = 200, description = "Add a class to the student's cart", body = ApiResponse<Selection>)
    ),
    tag = "Selections"
)]
pub async fn select_class(
    State(state): State<AppState>,
    Json(payload): Json<SelectClassRequest>,
) -> AppResult<Json<ApiResponse<Selection>>> {
    let resp = selection_service::select(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/userSeclectedClass/{email}",
    params(
        ("email" = String, Path, description = "Student email")
    ),
    responses(
        (status = 200, description = "List a student's cart entries", body = ApiResponse<SelectionList>)
    ),
    tag = "Selections"
)]
pub async fn user_selected_classes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<SelectionList>>> {
    let resp = selection_service::list_for_student(&state.pool, &email).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/deleteSelectedClass/{id}",
    params(
        ("id" = Uuid, Path, description = "Selection ID")
    ),
    responses(
        (status = 200, description = "Remove a cart entry; deletedCount 0 when missing", body = ApiResponse<DeleteOutcome>)
    ),
    tag = "Selections"
)]
pub async fn delete_selected_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<DeleteOutcome>>> {
    let resp = selection_service::remove(&state.pool, id).await?;
    Ok(Json(resp))
}
