use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::dto::NewSubjectDto;
use crate::errors::ApiError;
use crate::models::Subject;

pub async fn create(dto: NewSubjectDto, pool: &DbPool) -> Result<Subject, ApiError> {
    if dto.name.trim().is_empty() {
        return Err(ApiError::BadClientData);
    }
    let subject = Subject {
        id: Uuid::new_v4(),
        name: dto.name,
        description: dto.description,
    };
    db::subject::create(&subject, pool).await?;
    Ok(subject)
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<Subject, ApiError> {
    db::subject::get_by_id(id, pool)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn get_all(pool: &DbPool) -> Result<Vec<Subject>, ApiError> {
    Ok(db::subject::get_all(pool).await?)
}
