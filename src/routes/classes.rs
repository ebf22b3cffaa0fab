use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::classes::{ClassList, ProposeClassRequest, UpdateClassRequest, UpdateOutcome},
    error::AppResult,
    models::DanceClass,
    response::ApiResponse,
    services::class_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classes", post(propose_class).get(list_classes))
        .route("/classes/{id}", patch(approve_class))
        .route("/myAddedClasses/{email}", get(my_added_classes))
        .route(
            "/dashboard/updateAddedClass/{id}",
            get(get_class).patch(update_class),
        )
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = ProposeClassRequest,
    responses(
        (status = 200, description = "Propose a class (starts Pending)", body = ApiResponse<DanceClass>)
    ),
    tag = "Classes"
)]
pub async fn propose_class(
    State(state): State<AppState>,
    Json(payload): Json<ProposeClassRequest>,
) -> AppResult<Json<ApiResponse<DanceClass>>> {
    let resp = class_service::propose(&state.pool, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Approve a class (idempotent)", body = ApiResponse<UpdateOutcome>)
    ),
    tag = "Classes"
)]
pub async fn approve_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<UpdateOutcome>>> {
    let resp = class_service::approve(&state.pool, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "List all classes, every status", body = ApiResponse<ClassList>)
    ),
    tag = "Classes"
)]
pub async fn list_classes(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ClassList>>> {
    let resp = class_service::list_all(&state.pool).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/myAddedClasses/{email}",
    params(
        ("email" = String, Path, description = "Instructor email")
    ),
    responses(
        (status = 200, description = "Classes proposed by an instructor", body = ApiResponse<ClassList>)
    ),
    tag = "Classes"
)]
pub async fn my_added_classes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<ClassList>>> {
    let resp = class_service::list_by_instructor(&state.pool, &email).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/dashboard/updateAddedClass/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Fetch one class", body = ApiResponse<DanceClass>),
        (status = 404, description = "Class not found"),
    ),
    tag = "Classes"
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<DanceClass>>> {
    let resp = class_service::get(&state.pool, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/dashboard/updateAddedClass/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = UpdateClassRequest,
    responses(
        (status = 200, description = "Update the four editable fields", body = ApiResponse<UpdateOutcome>)
    ),
    tag = "Classes"
)]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassRequest>,
) -> AppResult<Json<ApiResponse<UpdateOutcome>>> {
    let resp = class_service::edit_fields(&state.pool, id, payload).await?;
    Ok(Json(resp))
}
