//! Entity extraction handlers
//!
//! Author: hephaex@gmail.com

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use nef_extractor::{ExtractionResult, PublicLabel, LABEL_MAP};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Extraction request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// Free-form text to analyze; may be empty
    #[schema(example = "France and Germany share a border in Europe")]
    pub text: String,
}

/// Find named entities in the submitted text
#[utoipa::path(
    post,
    path = "/api/v1/entities",
    tag = "entities",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Entities found in the text", body = ExtractionResult),
        (status = 500, description = "Entity model failed", body = ApiError)
    )
)]
pub async fn extract_entities(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractionResult>, AppError> {
    let result = state.client.get_ents(&req.text)?;

    tracing::debug!(
        chars = req.text.chars().count(),
        entities = result.ents.len(),
        "Extracted entities"
    );

    Ok(Json(result))
}

/// One row of the label mapping table
#[derive(Debug, Serialize, ToSchema)]
pub struct LabelMapping {
    /// Model label
    #[schema(example = "GPE")]
    pub internal: String,
    /// Category shown to users
    pub public: PublicLabel,
}

/// List the fixed model-label to public-label table
#[utoipa::path(
    get,
    path = "/api/v1/labels",
    tag = "entities",
    responses(
        (status = 200, description = "Label mapping table", body = [LabelMapping])
    )
)]
pub async fn list_labels() -> Json<Vec<LabelMapping>> {
    Json(
        LABEL_MAP
            .iter()
            .map(|(internal, public)| LabelMapping {
                internal: internal.to_string(),
                public: *public,
            })
            .collect(),
    )
}
