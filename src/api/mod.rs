// src/api/mod.rs
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::api::state::AppState;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data:; \
    font-src 'self';";

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::index,
        crate::api::handlers::generator::generate,
        crate::api::handlers::stats::stats_page,
        crate::api::handlers::stats::stats_download
    ),
    components(
        schemas(
            crate::api::types::GenerateForm,
            crate::models::StatsSnapshot,
            crate::models::StrengthLabel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation form"),
        (name = "Stats", description = "Daily generation counter")
    ),
    info(
        title = "Password Generator",
        version = "0.1.0",
        description = "Random password generator web form",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Headers added to every response
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
}

pub async fn start_server(state: Arc<AppState>, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting password generator web form on {}:{}", address, port);

    let state_data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(security_headers())
            .app_data(state_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod state;
pub mod views;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/stats"));
        assert!(paths.iter().any(|p| p.as_str() == "/stats/download"));
    }
}
