use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::DanceClass;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposeClassRequest {
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i32,
}

/// The four instructor-editable fields. Status and instructor identity are
/// deliberately not editable through this path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub available_seats: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ClassList {
    #[schema(value_type = Vec<DanceClass>)]
    pub items: Vec<DanceClass>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub modified_count: u64,
}
