pub mod booking;
pub mod certificate;
pub mod rating;
pub mod slot;
pub mod subject;
pub mod user;

use log::info;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub type DbPool = SqlitePool;

pub async fn init_db_pool(db_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool: DbPool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    run_migrations(&pool).await?;
    info!("database ready at {}", db_url);
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    execute_sql(pool, include_str!("../../migrations/001_initial.sql")).await
}

/// Execute a SQL migration file statement by statement, skipping comment lines.
async fn execute_sql(pool: &DbPool, sql: &str) -> Result<(), sqlx::Error> {
    for statement in sql.split(';') {
        let cleaned: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = cleaned.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }
    Ok(())
}
