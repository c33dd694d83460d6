//! NEF API - HTTP server
//!
//! Serves named entity extraction over JSON.
//!
//! Author: hephaex@gmail.com

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use nef_core::ServerConfig;
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::health::metrics))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .nest("/api/v1", routes::api_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_metrics_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )));

    if let Some(cors) = cors_layer(server) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// CORS is only applied when enabled and at least one valid origin is listed
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    if !server.cors_enabled {
        return None;
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Router backed by the built-in gazetteer, for integration tests
#[cfg(feature = "test-utils")]
pub fn create_router_for_testing() -> Router {
    use nef_extractor::GazetteerModel;

    let model = GazetteerModel::builtin().expect("built-in gazetteer is valid");
    create_router_with_model(Arc::new(model))
}

/// Router backed by an arbitrary model, for integration tests
#[cfg(feature = "test-utils")]
pub fn create_router_with_model(model: state::SharedModel) -> Router {
    let state = Arc::new(AppState::new(nef_core::AppConfig::default(), model));
    create_router(state)
}
