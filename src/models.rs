use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Tutor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Requested,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Legal lifecycle edges. `Completed` and `Cancelled` are terminal.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Requested, Confirmed)
                | (Confirmed, Completed)
                | (Requested, Cancelled)
                | (Confirmed, Cancelled)
        )
    }

    /// A booking counts against its slot unless it has been cancelled.
    pub fn is_active(self) -> bool {
        self != BookingStatus::Cancelled
    }

    /// The meeting link is only disclosed once the tutor has confirmed.
    pub fn discloses_meeting_link(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub pwd_hash: String,
    pub role: Role,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub subject_id: Option<Uuid>,
    pub topic: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub meeting_link: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub available: bool,
}

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub status: BookingStatus,
    pub meeting_link: Option<String>,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub rater_role: Role,
    pub score: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Certificate {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub validation_code: String,
    pub hours: f64,
    pub issued_at: DateTime<Utc>,
}
