use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::handlers::caller;
use crate::service;

#[post("/bookings/{id}/certificate")]
pub async fn issue_or_get(
    req: HttpRequest,
    id: web::Path<Uuid>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let caller = caller(&req)?;
    let certificate = service::certificate::issue_or_get(&caller, id.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(certificate))
}

#[get("/certificates/{code}")]
pub async fn get_by_code(
    code: web::Path<String>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let certificate = service::certificate::get_by_code(&code.into_inner(), conn).await?;
    Ok(HttpResponse::Ok().json(certificate))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(issue_or_get);
    cfg.service(get_by_code);
}
