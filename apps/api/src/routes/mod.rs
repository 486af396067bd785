pub mod health;

use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::analysis::handlers as analysis;
use crate::ats::handlers as ats;
use crate::config::Config;
use crate::errors::AppError;
use crate::roles::handlers as roles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/resume/analyze",
            post(analysis::handle_analyze_resume),
        )
        .route("/api/v1/ats-score", post(ats::handle_ats_score))
        // Role knowledge base
        .route("/api/v1/roles", get(roles::handle_list_roles))
        .route("/api/v1/roles/match", get(roles::handle_match_title))
        .route("/api/v1/roles/:role", get(roles::handle_get_role))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// CORS restricted to the configured origins. Unparsable origins are skipped.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
