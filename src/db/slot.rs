use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::SlotQuery;
use crate::models::Slot;

pub async fn create(slot: &Slot, pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO slots (id, tutor_id, subject_id, topic, level, description, meeting_link, date, start_time, available)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(slot.id)
    .bind(slot.tutor_id)
    .bind(slot.subject_id)
    .bind(&slot.topic)
    .bind(&slot.level)
    .bind(&slot.description)
    .bind(&slot.meeting_link)
    .bind(slot.date)
    .bind(slot.start_time)
    .bind(slot.available)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Option<Slot>, sqlx::Error> {
    sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_id_tx(
    id: Uuid,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<Option<Slot>, sqlx::Error> {
    sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

pub async fn filter(query: &SlotQuery, pool: &DbPool) -> Result<Vec<Slot>, sqlx::Error> {
    match (query.tutor_id, query.available) {
        (Some(tutor_id), Some(available)) => {
            sqlx::query_as::<_, Slot>(
                "SELECT * FROM slots WHERE tutor_id = ? AND available = ? ORDER BY date, start_time",
            )
            .bind(tutor_id)
            .bind(available)
            .fetch_all(pool)
            .await
        }
        (Some(tutor_id), None) => {
            sqlx::query_as::<_, Slot>(
                "SELECT * FROM slots WHERE tutor_id = ? ORDER BY date, start_time",
            )
            .bind(tutor_id)
            .fetch_all(pool)
            .await
        }
        (None, Some(available)) => {
            sqlx::query_as::<_, Slot>(
                "SELECT * FROM slots WHERE available = ? ORDER BY date, start_time",
            )
            .bind(available)
            .fetch_all(pool)
            .await
        }
        (None, None) => {
            sqlx::query_as::<_, Slot>("SELECT * FROM slots ORDER BY date, start_time")
                .fetch_all(pool)
                .await
        }
    }
}

/// Conditionally flips `available` off. Returns the number of rows changed:
/// zero means somebody else holds the slot, and the caller must not book it.
pub async fn claim(id: Uuid, tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE slots SET available = 0 WHERE id = ? AND available = 1")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}

/// Reopens the slot after a cancellation, whatever its current flag.
pub async fn release(id: Uuid, tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE slots SET available = 1 WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

pub async fn set_meeting_link(
    id: Uuid,
    link: &str,
    tx: &mut Transaction<'_, Sqlite>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE slots SET meeting_link = ? WHERE id = ?")
        .bind(link)
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
