//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::entities;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API v1 routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/entities", post(entities::extract_entities))
        .route("/labels", get(entities::list_labels))
}
