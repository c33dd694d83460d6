//! NLP model collaborator contract
//!
//! The adapter only needs one capability from a model: turn a string into
//! an ordered list of labelled spans. Anything implementing [`NerModel`]
//! can be plugged into [`crate::NamedEntityClient`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use nef_core::Result;

/// A recognized entity mention, tagged with the model's own label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Surface text of the mention
    pub text: String,
    /// Internal label from the model's taxonomy (e.g. "PERSON", "GPE")
    pub label: String,
}

impl Span {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Output of a single model call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    /// The analyzed text
    pub text: String,
    /// Recognized entities, in the order the model produced them
    pub ents: Vec<Span>,
}

impl Doc {
    pub fn new(text: impl Into<String>, ents: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            ents,
        }
    }
}

/// Trait for NLP models that recognize named entities
pub trait NerModel: Send + Sync {
    /// Analyze `text` and return the recognized entity spans
    fn analyze(&self, text: &str) -> Result<Doc>;

    /// Short identifier used in logs and health output
    fn name(&self) -> &str {
        "ner-model"
    }
}

impl<M: NerModel + ?Sized> NerModel for Arc<M> {
    fn analyze(&self, text: &str) -> Result<Doc> {
        (**self).analyze(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: NerModel + ?Sized> NerModel for &M {
    fn analyze(&self, text: &str) -> Result<Doc> {
        (**self).analyze(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
