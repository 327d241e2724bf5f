//! HTTP routes
//!
//! Public HTML pages, the public intake API and the admin API, assembled
//! into one axum router over the shared [`AppState`].

pub mod admin;
pub mod intake;
pub mod public;

use crate::app::AppState;
use axum::http::{header, HeaderMap};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Admin API, every route behind the admin gate
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(admin::list_applications)
                .put(admin::update_application)
                .delete(admin::delete_application),
        )
        .route("/applications/{id}", get(admin::get_application))
        .route("/pages", get(admin::list_pages).post(admin::create_page))
        .route("/pages/preview", post(admin::preview_blocks))
        .route("/pages/{id}", get(admin::get_page))
        .route("/pages/{id}/blocks", put(admin::save_page_blocks))
        .route("/pages/{id}/status", put(admin::set_page_status))
        .route("/block-templates", get(admin::block_templates))
        .route_layer(middleware::from_fn_with_state(state, admin::require_admin))
}

/// Full site router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/mortgage", get(public::mortgage_hub))
        .route("/mortgage/rates", get(public::mortgage_rates))
        .route("/mortgage/approval", get(public::mortgage_approval))
        .route("/mortgage/solutions", get(public::mortgage_solutions))
        .route("/api/contact", post(intake::submit_contact))
        .route("/api/mortgage-application", post(intake::submit_application))
        .nest("/api/admin", admin_routes(state.clone()))
        .route("/{*path}", get(public::dynamic_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok-1"));
        assert_eq!(bearer_token(&headers), Some("tok-1"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
