use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Wire field names stay camelCase for compatibility with the original JSON
// payloads (instructorEmail, availableSeats, classId, ...).

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    /// "student", "instructor" or "admin"; `None` means no role assigned yet.
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DanceClass {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_email: String,
    /// Major currency units (dollars), as the original stored them.
    pub price: f64,
    pub available_seats: i32,
    /// "Pending" until an admin approves, then "Approved".
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A student's cart entry: intent to enroll, prior to payment.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub id: Uuid,
    pub email: String,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub image: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Durable record of a completed enrollment. Immutable once written.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    /// The Selection id this payment retired (the original's `classId` quirk).
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub amount: f64,
    /// Processor charge reference; UNIQUE, doubles as the idempotency key.
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}
