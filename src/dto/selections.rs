use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Selection;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectClassRequest {
    pub email: String,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub image: Option<String>,
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SelectionList {
    #[schema(value_type = Vec<Selection>)]
    pub items: Vec<Selection>,
}

/// `deletedCount: 0` is a legal outcome, not an error; callers must inspect
/// the count.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}
