use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::service;

#[get("/users")]
pub async fn get_all(pool_state: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let users = service::user::get_all(conn).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{id}")]
pub async fn get_by_id(
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let user = service::user::get_by_id(id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/tutors")]
pub async fn get_tutors(pool_state: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let tutors = service::user::get_tutors(conn).await?;
    Ok(HttpResponse::Ok().json(tutors))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_all);
    cfg.service(get_tutors);
    cfg.service(get_by_id);
}
