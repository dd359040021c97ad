use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::BookingQuery;
use crate::models::{Booking, BookingStatus};

pub async fn create(
    booking: &Booking,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO bookings (id, student_id, slot_id, status, meeting_link)
        VALUES (?, ?, ?, ?, ?)",
    )
    .bind(booking.id)
    .bind(booking.student_id)
    .bind(booking.slot_id)
    .bind(booking.status)
    .bind(&booking.meeting_link)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_id_tx(
    id: Uuid,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

/// The unique row for a (student, slot) pair, whatever its status.
pub async fn find_for_pair(
    student_id: Uuid,
    slot_id: Uuid,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE student_id = ? AND slot_id = ?")
        .bind(student_id)
        .bind(slot_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Filtered listing, always restricted to bookings the viewer participates
/// in, as student or as the slot's tutor.
pub async fn filter(
    viewer_id: Uuid,
    query: &BookingQuery,
    pool: &DbPool,
) -> Result<Vec<Booking>, sqlx::Error> {
    match (query.student_id, query.tutor_id) {
        (Some(student_id), Some(tutor_id)) => {
            sqlx::query_as::<_, Booking>(
                "SELECT b.* FROM bookings b JOIN slots s ON s.id = b.slot_id
                WHERE (b.student_id = ?1 OR s.tutor_id = ?1)
                AND b.student_id = ?2 AND s.tutor_id = ?3",
            )
            .bind(viewer_id)
            .bind(student_id)
            .bind(tutor_id)
            .fetch_all(pool)
            .await
        }
        (Some(student_id), None) => {
            sqlx::query_as::<_, Booking>(
                "SELECT b.* FROM bookings b JOIN slots s ON s.id = b.slot_id
                WHERE (b.student_id = ?1 OR s.tutor_id = ?1) AND b.student_id = ?2",
            )
            .bind(viewer_id)
            .bind(student_id)
            .fetch_all(pool)
            .await
        }
        (None, Some(tutor_id)) => {
            sqlx::query_as::<_, Booking>(
                "SELECT b.* FROM bookings b JOIN slots s ON s.id = b.slot_id
                WHERE (b.student_id = ?1 OR s.tutor_id = ?1) AND s.tutor_id = ?2",
            )
            .bind(viewer_id)
            .bind(tutor_id)
            .fetch_all(pool)
            .await
        }
        (None, None) => {
            sqlx::query_as::<_, Booking>(
                "SELECT b.* FROM bookings b JOIN slots s ON s.id = b.slot_id
                WHERE b.student_id = ?1 OR s.tutor_id = ?1",
            )
            .bind(viewer_id)
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn set_status(
    id: Uuid,
    status: BookingStatus,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

