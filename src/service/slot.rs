use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::dto::{NewSlotDto, SlotQuery};
use crate::errors::ApiError;
use crate::models::{Role, Slot};

use super::auth::UserAuthData;

/// Publishes a bookable slot. The owning tutor is always the caller.
pub async fn create(
    caller: &UserAuthData,
    dto: NewSlotDto,
    pool: &DbPool,
) -> Result<Slot, ApiError> {
    if caller.role != Role::Tutor {
        return Err(ApiError::NotEligible);
    }
    if let Some(subject_id) = dto.subject_id {
        if db::subject::get_by_id(subject_id, pool).await?.is_none() {
            return Err(ApiError::BadClientData);
        }
    }
    let slot = Slot {
        id: Uuid::new_v4(),
        tutor_id: caller.user_id,
        subject_id: dto.subject_id,
        topic: dto.topic,
        level: dto.level,
        description: dto.description,
        meeting_link: dto.meeting_link,
        date: dto.date,
        start_time: dto.start_time,
        available: true,
    };
    db::slot::create(&slot, pool).await?;
    Ok(slot)
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Slot, ApiError> {
    db::slot::get_by_id(id, pool)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn filter(query: &SlotQuery, pool: &DbPool) -> Result<Vec<Slot>, ApiError> {
    Ok(db::slot::filter(query, pool).await?)
}
