use chrono::{NaiveDate, NaiveTime};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use tutoring_booking_service::db::{self, DbPool};
use tutoring_booking_service::dto::NewSlotDto;
use tutoring_booking_service::models::{Role, Slot, User};
use tutoring_booking_service::service;
use tutoring_booking_service::service::auth::UserAuthData;

/// Fresh in-memory database. A single connection keeps every query on the
/// same in-memory instance.
pub async fn test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

pub async fn seed_user(name: &str, role: Role, pool: &DbPool) -> UserAuthData {
    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name),
        pwd_hash: service::crypto::get_sha3_256_hash("pw"),
        role,
    };
    db::user::create(&user, pool).await.unwrap();
    UserAuthData {
        user_id: user.id,
        name: user.name,
        role: user.role,
    }
}

pub async fn seed_slot(tutor: &UserAuthData, link: Option<&str>, pool: &DbPool) -> Slot {
    service::slot::create(
        tutor,
        NewSlotDto {
            subject_id: None,
            topic: Some("derivatives".to_string()),
            level: None,
            description: None,
            meeting_link: link.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        },
        pool,
    )
    .await
    .unwrap()
}
