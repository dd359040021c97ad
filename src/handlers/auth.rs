use actix_web::{post, web, HttpResponse};
use log::info;

use crate::db::DbPool;
use crate::dto::{LoginUserRequest, NewUserDto};
use crate::errors::ApiError;
use crate::service;

#[post("/register")]
pub async fn register(
    dto: web::Json<NewUserDto>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let user = service::user::create(dto.into_inner(), conn).await?;
    info!("registered user {}", user.id);
    Ok(HttpResponse::Created().json(user))
}

#[post("/login")]
pub async fn login(
    dto: web::Json<LoginUserRequest>,
    pool_state: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &DbPool = pool_state.get_ref();
    let response = service::user::login(dto.into_inner(), conn).await?;
    info!("user {} logged in", response.user.id);
    Ok(HttpResponse::Ok().json(response))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register);
    cfg.service(login);
}
