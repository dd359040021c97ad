use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::dto::{BookingQuery, BookingResponse};
use crate::errors::ApiError;
use crate::models::{Booking, BookingStatus, Role};

use super::auth::UserAuthData;

/// Virtual-meeting room for a slot that has none of its own. Derived from
/// the slot id so the same slot always maps to the same room.
pub fn synthesize_meeting_link(slot_id: &Uuid) -> String {
    format!("https://meet.jit.si/tutoring-{}", slot_id)
}

/// Books a slot for the calling student.
///
/// The whole check-then-claim sequence runs inside one transaction: the
/// conditional update in [`db::slot::claim`] is the only thing standing
/// between two simultaneous requests and a double booking, so the booking
/// row is only inserted (or reactivated) once that update reports a row
/// actually changed.
pub async fn create(
    caller: &UserAuthData,
    slot_id: Uuid,
    pool: &DbPool,
) -> Result<BookingResponse, ApiError> {
    if caller.role != Role::Student {
        return Err(ApiError::NotEligible);
    }

    let mut tx = pool.begin().await?;

    let slot = db::slot::get_by_id_tx(slot_id, &mut tx)
        .await?
        .ok_or(ApiError::NotFound)?;

    // The (student, slot) pair is unique; a cancelled row is reactivated
    // instead of inserting a duplicate.
    if let Some(existing) = db::booking::find_for_pair(caller.user_id, slot_id, &mut tx).await? {
        if existing.status.is_active() {
            return Err(ApiError::DuplicateBooking);
        }
        if db::slot::claim(slot_id, &mut tx).await? == 0 {
            return Err(ApiError::SlotUnavailable);
        }
        db::booking::set_status(existing.id, BookingStatus::Requested, &mut tx).await?;
        tx.commit().await?;
        let booking = Booking {
            status: BookingStatus::Requested,
            ..existing
        };
        return Ok(booking.into());
    }

    if db::slot::claim(slot_id, &mut tx).await? == 0 {
        return Err(ApiError::SlotUnavailable);
    }

    let meeting_link = match slot.meeting_link {
        Some(link) => link,
        None => {
            let link = synthesize_meeting_link(&slot_id);
            db::slot::set_meeting_link(slot_id, &link, &mut tx).await?;
            link
        }
    };

    let booking = Booking {
        id: Uuid::new_v4(),
        student_id: caller.user_id,
        slot_id,
        status: BookingStatus::Requested,
        meeting_link: Some(meeting_link),
    };
    db::booking::create(&booking, &mut tx).await?;
    tx.commit().await?;
    Ok(booking.into())
}

/// Moves a booking along its lifecycle. Confirm and complete belong to the
/// slot's tutor; either participant may cancel. Cancellation reopens the
/// slot whatever its current flag.
pub async fn transition(
    caller: &UserAuthData,
    booking_id: Uuid,
    new_status: BookingStatus,
    pool: &DbPool,
) -> Result<BookingResponse, ApiError> {
    let mut tx = pool.begin().await?;

    let booking = db::booking::get_by_id_tx(booking_id, &mut tx)
        .await?
        .ok_or(ApiError::NotFound)?;
    let slot = db::slot::get_by_id_tx(booking.slot_id, &mut tx)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Edge legality first: a participant asking for an impossible move is
    // told so, NotEligible is reserved for the wrong caller.
    if !booking.status.can_transition_to(new_status) {
        return Err(ApiError::InvalidTransition);
    }
    let permitted = match new_status {
        BookingStatus::Confirmed | BookingStatus::Completed => caller.user_id == slot.tutor_id,
        BookingStatus::Cancelled => {
            caller.user_id == booking.student_id || caller.user_id == slot.tutor_id
        }
        // no edge leads back to Requested, ruled out above
        BookingStatus::Requested => false,
    };
    if !permitted {
        return Err(ApiError::NotEligible);
    }

    db::booking::set_status(booking_id, new_status, &mut tx).await?;
    if new_status == BookingStatus::Cancelled {
        db::slot::release(booking.slot_id, &mut tx).await?;
    }
    tx.commit().await?;

    let updated = Booking {
        status: new_status,
        ..booking
    };
    Ok(updated.into())
}

/// Bookings are only visible to their two participants.
pub async fn get_by_id(
    caller: &UserAuthData,
    booking_id: Uuid,
    pool: &DbPool,
) -> Result<BookingResponse, ApiError> {
    let booking = load_as_participant(caller, booking_id, pool).await?;
    Ok(booking.into())
}

/// Listing is always scoped to the caller's own bookings, so confirmed
/// meeting links never reach a third party.
pub async fn filter(
    caller: &UserAuthData,
    query: &BookingQuery,
    pool: &DbPool,
) -> Result<Vec<BookingResponse>, ApiError> {
    let bookings = db::booking::filter(caller.user_id, query, pool).await?;
    Ok(bookings.into_iter().map(BookingResponse::from).collect())
}

/// Shared participant check for the rating and certificate registries.
pub async fn load_as_participant(
    caller: &UserAuthData,
    booking_id: Uuid,
    pool: &DbPool,
) -> Result<Booking, ApiError> {
    let booking = db::booking::get_by_id(booking_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    let slot = db::slot::get_by_id(booking.slot_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    if caller.user_id != booking.student_id && caller.user_id != slot.tutor_id {
        return Err(ApiError::NotEligible);
    }
    Ok(booking)
}
