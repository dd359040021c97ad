use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::NewSubjectDto;
use crate::errors::ApiError;
use crate::service;

#[post("/subjects")]
pub async fn create(
    dto: web::Json<NewSubjectDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let subject = service::subject::create(dto.into_inner(), conn).await?;
    Ok(HttpResponse::Created().json(subject))
}

#[get("/subjects")]
pub async fn get_all(pool_state: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let subjects = service::subject::get_all(conn).await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[get("/subjects/{id}")]
pub async fn get_by_id(
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let subject = service::subject::get_by_id(id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(subject))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(get_all);
    cfg.service(get_by_id);
}
