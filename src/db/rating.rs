use uuid::Uuid;

use crate::db::DbPool;
use crate::models::{Rating, Role};

pub async fn create(rating: &Rating, pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO ratings (id, booking_id, rater_role, score, comment, created_at)
        VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(rating.id)
    .bind(rating.booking_id)
    .bind(rating.rater_role)
    .bind(rating.score)
    .bind(&rating.comment)
    .bind(rating.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// At most one rating exists per (booking, role) pair.
pub async fn find_for_role(
    booking_id: Uuid,
    rater_role: Role,
    pool: &DbPool,
) -> Result<Option<Rating>, sqlx::Error> {
    sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE booking_id = ? AND rater_role = ?")
        .bind(booking_id)
        .bind(rater_role)
        .fetch_optional(pool)
        .await
}
