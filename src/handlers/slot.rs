use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::{NewSlotDto, SlotQuery};
use crate::errors::ApiError;
use crate::handlers::caller;
use crate::service;

#[post("/slots")]
pub async fn create(
    req: HttpRequest,
    dto: web::Json<NewSlotDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let slot = service::slot::create(&caller, dto.into_inner(), conn).await?;
    Ok(HttpResponse::Created().json(slot))
}

#[get("/slots")]
pub async fn get_all(
    query: web::Query<SlotQuery>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let slots = service::slot::filter(&query.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(slots))
}

#[get("/slots/{id}")]
pub async fn get_by_id(
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let slot = service::slot::get_by_id(id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(slot))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(get_all);
    cfg.service(get_by_id);
}
