use uuid::Uuid;

use crate::db::DbPool;
use crate::models::Certificate;

pub async fn create(certificate: &Certificate, pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO certificates (id, booking_id, validation_code, hours, issued_at)
        VALUES (?, ?, ?, ?, ?)",
    )
    .bind(certificate.id)
    .bind(certificate.booking_id)
    .bind(&certificate.validation_code)
    .bind(certificate.hours)
    .bind(certificate.issued_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_booking(
    booking_id: Uuid,
    pool: &DbPool,
) -> Result<Option<Certificate>, sqlx::Error> {
    sqlx::query_as::<_, Certificate>("SELECT * FROM certificates WHERE booking_id = ?")
        .bind(booking_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_code(
    code: &str,
    pool: &DbPool,
) -> Result<Option<Certificate>, sqlx::Error> {
    sqlx::query_as::<_, Certificate>("SELECT * FROM certificates WHERE validation_code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
}
