use uuid::Uuid;

use crate::db::DbPool;
use crate::models::{Role, User};

pub async fn create(user: &User, pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, name, email, pwd_hash, role) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.pwd_hash)
    .bind(user.role)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_email(email: &str, pool: &DbPool) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn get_all(pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_by_role(role: Role, pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = ? ORDER BY name")
        .bind(role)
        .fetch_all(pool)
        .await
}

pub async fn email_exists(email: &str, pool: &DbPool) -> Result<bool, sqlx::Error> {
    Ok(get_by_email(email, pool).await?.is_some())
}
