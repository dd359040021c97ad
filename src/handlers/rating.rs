use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::NewRatingDto;
use crate::errors::ApiError;
use crate::handlers::caller;
use crate::service;

#[post("/bookings/{id}/ratings")]
pub async fn submit(
    req: HttpRequest,
    id: web::Path<Uuid>,
    dto: web::Json<NewRatingDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let rating = service::rating::submit(&caller, id.into_inner(), dto.into_inner(), conn).await?;
    Ok(HttpResponse::Created().json(rating))
}

#[get("/bookings/{id}/ratings")]
pub async fn get_own(
    req: HttpRequest,
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let rating = service::rating::get_own(&caller, id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(rating))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit);
    cfg.service(get_own);
}
