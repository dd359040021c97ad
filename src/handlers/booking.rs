use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use log::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::{BookingQuery, NewBookingDto, TransitionDto};
use crate::errors::ApiError;
use crate::handlers::caller;
use crate::service;

#[post("/bookings")]
pub async fn create(
    req: HttpRequest,
    dto: web::Json<NewBookingDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let booking = service::booking::create(&caller, dto.slot_id, conn).await?;
    info!("booking {} created for slot {}", booking.id, booking.slot_id);
    Ok(HttpResponse::Created().json(booking))
}

#[get("/bookings")]
pub async fn get_all(
    req: HttpRequest,
    query: web::Query<BookingQuery>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let bookings = service::booking::filter(&caller, &query.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

#[get("/bookings/{id}")]
pub async fn get_by_id(
    req: HttpRequest,
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let booking = service::booking::get_by_id(&caller, id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(booking))
}

#[put("/bookings/{id}/status")]
pub async fn transition(
    req: HttpRequest,
    id: web::Path<Uuid>,
    dto: web::Json<TransitionDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let booking = service::booking::transition(&caller, id.into_inner(), dto.status, conn).await?;
    info!("booking {} moved to {:?}", booking.id, booking.status);
    Ok(HttpResponse::Ok().json(booking))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
    cfg.service(get_all);
    cfg.service(get_by_id);
    cfg.service(transition);
}
