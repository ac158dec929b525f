// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator form
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::generator::index))
            .route(web::post().to(handlers::generator::generate))
    );

    // Daily counter
    cfg.service(
        web::scope("/stats")
            .route("", web::get().to(handlers::stats::stats_page))
            .route("/download", web::get().to(handlers::stats::stats_download))
    );
}
