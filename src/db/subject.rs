use uuid::Uuid;

use crate::db::DbPool;
use crate::models::Subject;

pub async fn create(subject: &Subject, pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO subjects (id, name, description) VALUES (?, ?, ?)")
        .bind(subject.id)
        .bind(&subject.name)
        .bind(&subject.description)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Option<Subject>, sqlx::Error> {
    sqlx::query_as::<_, Subject>("SELECT * FROM subjects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_all(pool: &DbPool) -> Result<Vec<Subject>, sqlx::Error> {
    sqlx::query_as::<_, Subject>("SELECT * FROM subjects ORDER BY name")
        .fetch_all(pool)
        .await
}
