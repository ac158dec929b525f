// src/api/handlers/stats.rs

use actix_web::{http::header, web, HttpResponse};
use chrono::Local;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::api::views;
use crate::models::StatsSnapshot;

pub const DOWNLOAD_FILENAME: &str = "password_stats.json";

/// Statistics page
///
/// Shows how many passwords were generated today.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Today's generation count", body = String, content_type = "text/html")
    )
)]
pub async fn stats_page(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let count = state.stats.today_count(Local::now().date_naive());

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::render_stats(count))
}

/// Download stats as JSON
#[utoipa::path(
    get,
    path = "/stats/download",
    tag = "Stats",
    responses(
        (status = 200, description = "Stored counter plus the server's current date", body = StatsSnapshot)
    )
)]
pub async fn stats_download(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let snapshot = state.stats.snapshot(Local::now().date_naive());

    HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", DOWNLOAD_FILENAME),
        ))
        .json(snapshot)
}
