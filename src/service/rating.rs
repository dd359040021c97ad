use chrono::Utc;
use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::dto::NewRatingDto;
use crate::errors::{is_unique_violation, ApiError};
use crate::models::Rating;

use super::auth::UserAuthData;
use super::booking;

/// Records the caller's rating for a booking. The rater role is the
/// caller's own role, so one side can never submit a rating stamped as
/// the other's.
pub async fn submit(
    caller: &UserAuthData,
    booking_id: Uuid,
    dto: NewRatingDto,
    pool: &DbPool,
) -> Result<Rating, ApiError> {
    if !(1..=5).contains(&dto.score) {
        return Err(ApiError::BadClientData);
    }
    booking::load_as_participant(caller, booking_id, pool).await?;

    if db::rating::find_for_role(booking_id, caller.role, pool)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateRating);
    }

    let rating = Rating {
        id: Uuid::new_v4(),
        booking_id,
        rater_role: caller.role,
        score: dto.score,
        comment: dto.comment,
        created_at: Utc::now(),
    };
    // A racing submit slips past the pre-check and trips the UNIQUE
    // constraint instead; report it as the same duplicate.
    match db::rating::create(&rating, pool).await {
        Ok(()) => Ok(rating),
        Err(err) if is_unique_violation(&err) => Err(ApiError::DuplicateRating),
        Err(err) => Err(err.into()),
    }
}

/// Each party only ever sees the rating they themselves submitted.
pub async fn get_own(
    caller: &UserAuthData,
    booking_id: Uuid,
    pool: &DbPool,
) -> Result<Option<Rating>, ApiError> {
    booking::load_as_participant(caller, booking_id, pool).await?;
    Ok(db::rating::find_for_role(booking_id, caller.role, pool).await?)
}
