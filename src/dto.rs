use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, Role, User};

#[derive(Debug, Deserialize, Clone)]
pub struct NewUserDto {
    pub name: String,
    pub email: String,
    pub pwd: String,
    pub pwd_confirm: String,
    pub role: Role,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoginUserRequest {
    pub email: String,
    pub pwd: String,
}

/// Public projection of a user, without the password digest.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUserResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: &Uuid, name: &str, role: Role, exp: usize) -> Self {
        Self {
            user_id: *user_id,
            name: name.to_string(),
            role,
            exp,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewSubjectDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewSlotDto {
    pub subject_id: Option<Uuid>,
    pub topic: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub meeting_link: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SlotQuery {
    pub tutor_id: Option<Uuid>,
    pub available: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewBookingDto {
    pub slot_id: Uuid,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingQuery {
    pub student_id: Option<Uuid>,
    pub tutor_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TransitionDto {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewRatingDto {
    pub score: i64,
    pub comment: Option<String>,
}

/// Outward shape of a booking. The meeting link is withheld until the
/// tutor has confirmed the session.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub status: BookingStatus,
    pub meeting_link: Option<String>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let meeting_link = if booking.status.discloses_meeting_link() {
            booking.meeting_link
        } else {
            None
        };
        Self {
            id: booking.id,
            student_id: booking.student_id,
            slot_id: booking.slot_id,
            status: booking.status,
            meeting_link,
        }
    }
}
