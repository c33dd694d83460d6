//! OpenAPI document
//!
//! Author: hephaex@gmail.com

use crate::error::ApiError;
use crate::handlers::{entities, health};
use axum::Json;
use nef_extractor::{ExtractionResult, MappedEntity, PublicLabel};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Named Entity Finder API"),
    paths(
        health::health_check,
        health::metrics,
        entities::extract_entities,
        entities::list_labels,
    ),
    components(schemas(
        entities::ExtractRequest,
        entities::LabelMapping,
        health::HealthResponse,
        health::MetricsResponse,
        ExtractionResult,
        MappedEntity,
        PublicLabel,
        ApiError,
    )),
    tags(
        (name = "entities", description = "Named entity extraction"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
