use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::error::ApiError;
use crate::handlers::{protected, public};
use crate::state::AppState;

/// Full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(portal_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(public::health_get))
        .route("/api/cities", get(public::cities_get))
}

fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/api/portal/auth/me", get(protected::me_get))
        .route("/api/portal/offices", get(protected::offices_get))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// CORS policy from security settings; `None` when disabled
pub fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins(&security.cors_origins)))
            .allow_credentials(true),
    )
}

/// Explicit origins only: credentialed CORS cannot use a wildcard
fn allowed_origins(configured: &[String]) -> Vec<HeaderValue> {
    configured
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect()
}
