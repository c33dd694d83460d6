//! Named entity client
//!
//! Wraps an injected [`NerModel`] and turns its spans into the
//! public `{ent, label}` shape served to callers.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use nef_core::Result;

use crate::label::{map_label, PublicLabel};
use crate::model::{NerModel, Span};

/// An entity as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MappedEntity {
    /// Surface text, copied verbatim from the model span
    #[schema(example = "Judith Polgar")]
    pub ent: String,
    /// Public category, `null` when the model label has no mapping
    pub label: Option<PublicLabel>,
}

impl From<Span> for MappedEntity {
    fn from(span: Span) -> Self {
        let label = map_label(&span.label);
        if label.is_none() {
            debug!(label = %span.label, "Unmapped entity label");
        }
        Self {
            ent: span.text,
            label,
        }
    }
}

/// Result of one extraction call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractionResult {
    /// Entities in model order, duplicates included
    pub ents: Vec<MappedEntity>,
    /// Rendering payload; always empty
    pub html: String,
}

/// Client that extracts entities through an injected NLP model
#[derive(Debug, Clone)]
pub struct NamedEntityClient<M> {
    model: M,
}

impl<M: NerModel> NamedEntityClient<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Borrow the underlying model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the model over `sentence` and map every span's label.
    ///
    /// Model errors are returned as-is.
    pub fn get_ents(&self, sentence: &str) -> Result<ExtractionResult> {
        let doc = self.model.analyze(sentence)?;
        debug!(
            model = self.model.name(),
            spans = doc.ents.len(),
            "Model returned entity spans"
        );

        let ents = doc.ents.into_iter().map(MappedEntity::from).collect();

        Ok(ExtractionResult {
            ents,
            html: String::new(),
        })
    }

    /// Map a model label to its public category
    pub fn map_label(label: &str) -> Option<PublicLabel> {
        map_label(label)
    }
}
