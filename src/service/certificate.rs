use chrono::Utc;
use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::errors::{is_unique_violation, ApiError};
use crate::models::{BookingStatus, Certificate};

use super::auth::UserAuthData;
use super::crypto;

/// Validation code for a completed session, derived from the booking id and
/// the slot date so reissuing can never mint a different code.
pub fn derive_validation_code(booking_id: &Uuid, slot_date: &chrono::NaiveDate) -> String {
    crypto::get_sha3_256_hash(&format!("{}:{}", booking_id, slot_date))
}

/// Get-or-create, keyed by booking. Only the student of a completed booking
/// may request the certificate; repeated calls return the stored record.
pub async fn issue_or_get(
    caller: &UserAuthData,
    booking_id: Uuid,
    pool: &DbPool,
) -> Result<Certificate, ApiError> {
    let booking = db::booking::get_by_id(booking_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    if booking.status != BookingStatus::Completed || caller.user_id != booking.student_id {
        return Err(ApiError::NotEligible);
    }

    if let Some(existing) = db::certificate::find_by_booking(booking_id, pool).await? {
        return Ok(existing);
    }

    let slot = db::slot::get_by_id(booking.slot_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    let certificate = Certificate {
        id: Uuid::new_v4(),
        booking_id,
        validation_code: derive_validation_code(&booking_id, &slot.date),
        hours: 1.0,
        issued_at: Utc::now(),
    };
    // A racing issue for the same booking trips the UNIQUE constraint;
    // return the record the winner stored, keeping issuance idempotent.
    match db::certificate::create(&certificate, pool).await {
        Ok(()) => Ok(certificate),
        Err(err) if is_unique_violation(&err) => db::certificate::find_by_booking(booking_id, pool)
            .await?
            .ok_or(ApiError::InternalError),
        Err(err) => Err(err.into()),
    }
}

pub async fn get_by_code(code: &str, pool: &DbPool) -> Result<Certificate, ApiError> {
    db::certificate::find_by_code(code, pool)
        .await?
        .ok_or(ApiError::NotFound)
}
