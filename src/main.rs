use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::env;

use tutoring_booking_service::db::{self, DbPool};
use tutoring_booking_service::handlers;
use tutoring_booking_service::service;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    service::log::init_logger();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|e| {
        panic!("Failed to get env with name 'DATABASE_URL': {:?}", e);
    });
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let pool: DbPool = db::init_db_pool(&db_url)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize database: {:?}", e));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(service::log::LoggerMiddleware)
            .service(web::scope("/auth").configure(handlers::auth::init_routes))
            .service(
                web::scope("/api")
                    .wrap(service::auth::AuthMiddleware)
                    .configure(handlers::user::init_routes)
                    .configure(handlers::subject::init_routes)
                    .configure(handlers::slot::init_routes)
                    .configure(handlers::booking::init_routes)
                    .configure(handlers::rating::init_routes)
                    .configure(handlers::certificate::init_routes),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
