// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use chrono::Local;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::api::types::{Flash, GenerateForm, GeneratedPassword, IndexPage};
use crate::api::views;
use crate::generators::{check_strength, GeneratorError, PasswordGenerator};
use crate::models::GenerationRequest;

fn render(state: &AppState, flashes: Vec<Flash>, result: Option<GeneratedPassword>) -> HttpResponse {
    let page = IndexPage {
        default_length: state.default_length,
        flashes,
        result,
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::render_index(&page))
}

/// Generator form
#[utoipa::path(
    get,
    path = "/",
    tag = "Generator",
    responses(
        (status = 200, description = "Empty generator form", body = String, content_type = "text/html")
    )
)]
pub async fn index(state: web::Data<Arc<AppState>>) -> HttpResponse {
    render(&state, Vec::new(), None)
}

/// Generate a password
///
/// Generates a password from the submitted form, bumps the daily counter and
/// optionally appends the password to the passwords file. Invalid lengths
/// re-render the form with an error notice.
#[utoipa::path(
    post,
    path = "/",
    tag = "Generator",
    request_body(content = GenerateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form with the generated password and its strength, or an error notice", body = String, content_type = "text/html")
    )
)]
pub async fn generate(
    state: web::Data<Arc<AppState>>,
    form: web::Form<GenerateForm>,
) -> HttpResponse {
    let raw_length = form
        .length
        .clone()
        .unwrap_or_else(|| state.default_length.to_string());

    let request = match GenerationRequest::parse(&raw_length, form.include_numbers(), form.include_symbols()) {
        Ok(request) => request,
        Err(GeneratorError::NonPositiveLength(_)) => {
            return render(&state, vec![Flash::error("Length must be greater than 0!")], None);
        }
        Err(GeneratorError::InvalidNumber(_)) => {
            return render(&state, vec![Flash::error("Please enter a valid number for length!")], None);
        }
        Err(e @ GeneratorError::LengthTooLarge { .. }) => {
            return render(&state, vec![Flash::error(e.to_string())], None);
        }
    };

    let password = PasswordGenerator::new().generate_password(&request);
    let strength = check_strength(&password);

    log::info!(
        "Generated pw len={} nums={} syms={}",
        request.length(),
        request.include_numbers,
        request.include_symbols
    );

    if let Err(e) = state.stats.increment(Local::now().date_naive()) {
        log::error!("Error updating stats: {}", e);
    }

    let mut flashes = Vec::new();
    let mut saved = false;

    if form.save_to_file() {
        match state.password_log.append(&password) {
            Ok(()) => {
                saved = true;
                flashes.push(Flash::success(format!(
                    "Password saved to {}!",
                    state.password_log.path().display()
                )));
            }
            Err(e) => {
                log::error!("Failed to save password to {}: {}", state.password_log.path().display(), e);
                flashes.push(Flash::error("Could not save the password to file."));
            }
        }
    }

    render(&state, flashes, Some(GeneratedPassword { password, strength, saved }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{routes, security_headers};
    use crate::storage::{PasswordLog, StatsStore};
    use actix_web::{http::header, test, App};
    use tempfile::{tempdir, TempDir};

    fn state_in(dir: &TempDir) -> Arc<AppState> {
        Arc::new(AppState::new(
            PasswordLog::new(dir.path().join("passwords.txt")),
            StatsStore::new(dir.path().join("stats.json")),
            12,
        ))
    }

    fn extract_password(html: &str) -> String {
        let start = html.find("<span class=\"password\">").expect("password span") + "<span class=\"password\">".len();
        let end = start + html[start..].find("</span>").expect("closing span");
        html[start..end].to_string()
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .wrap(security_headers())
                    .app_data(web::Data::new(Arc::clone(&$state)))
                    .configure(routes::configure_routes),
            )
            .await
        };
    }

    async fn post_form(state: &Arc<AppState>, form: &[(&str, &str)]) -> String {
        let app = app!(state);
        let req = test::TestRequest::post().uri("/").set_form(form).to_request();
        let body = test::call_and_read_body(&app, req).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn get_renders_form_with_csp() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app = app!(state);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());

        assert_eq!(
            resp.headers().get(header::CONTENT_SECURITY_POLICY).unwrap(),
            "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self';"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_SECURITY_POLICY).unwrap(),
            crate::api::CONTENT_SECURITY_POLICY
        );

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<form method=\"post\""));
        assert!(body.contains(r#"value="12""#));
        assert!(!body.contains("class=\"result\""));
    }

    #[actix_web::test]
    async fn post_generates_and_counts() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("length", "8")]).await;
        let password = extract_password(&body);

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(body.contains("Strength: <strong>Medium</strong>"));
        assert_eq!(state.stats.today_count(Local::now().date_naive()), 1);
        assert!(state.password_log.read_all().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn missing_length_uses_default() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("include_numbers", "on")]).await;
        let password = extract_password(&body);

        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(body.contains("Strength: <strong>Strong</strong>"));
    }

    #[actix_web::test]
    async fn save_appends_to_password_file() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("length", "10"), ("save_to_file", "on")]).await;
        let password = extract_password(&body);

        assert!(body.contains("class=\"flash success\""));
        assert!(body.contains("Saved to file</div>"));
        assert_eq!(state.password_log.read_all().unwrap(), vec![password]);
    }

    #[actix_web::test]
    async fn non_positive_length_flashes_error() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("length", "0"), ("save_to_file", "on")]).await;

        assert!(body.contains("Length must be greater than 0!"));
        assert!(!body.contains("class=\"result\""));
        assert_eq!(state.stats.today_count(Local::now().date_naive()), 0);
        assert!(state.password_log.read_all().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn non_numeric_length_flashes_error() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("length", "lots")]).await;

        assert!(body.contains("Please enter a valid number for length!"));
        assert!(!body.contains("class=\"result\""));
    }

    #[actix_web::test]
    async fn oversized_length_flashes_error_and_server_keeps_serving() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);

        let body = post_form(&state, &[("length", "99999999999999"), ("save_to_file", "on")]).await;

        assert!(body.contains("Length must be at most 100000!"));
        assert!(body.contains("class=\"flash error\""));
        assert!(!body.contains("class=\"result\""));
        assert_eq!(state.stats.today_count(Local::now().date_naive()), 0);
        assert!(state.password_log.read_all().unwrap().is_empty());

        let body = post_form(&state, &[("length", "7")]).await;
        assert_eq!(extract_password(&body).len(), 7);
    }

    #[actix_web::test]
    async fn stats_failure_does_not_block_generation() {
        let dir = tempdir().unwrap();
        let state = Arc::new(AppState::new(
            PasswordLog::new(dir.path().join("passwords.txt")),
            StatsStore::new(dir.path().join("missing").join("stats.json")),
            12,
        ));

        let body = post_form(&state, &[("length", "6")]).await;
        assert_eq!(extract_password(&body).len(), 6);
    }
}
