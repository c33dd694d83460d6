//! Test doubles for [`NerModel`]
//!
//! Available in unit tests and, for downstream crates, under the
//! `test-utils` feature.

use std::sync::Mutex;

use nef_core::{NefError, Result};

use crate::model::{Doc, NerModel, Span};

/// Model double that returns a preset list of spans for any input
#[derive(Debug)]
pub struct StubModel {
    language: String,
    ents: Vec<Span>,
    calls: Mutex<Vec<String>>,
}

impl StubModel {
    /// Create a double that recognizes nothing
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ents: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the `(text, label)` pairs returned for every call
    pub fn returns_doc_ents(mut self, ents: &[(&str, &str)]) -> Self {
        self.ents = ents
            .iter()
            .map(|(text, label)| Span::new(*text, *label))
            .collect();
        self
    }

    /// Language code given at construction
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Texts this model has been asked to analyze, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl NerModel for StubModel {
    fn analyze(&self, text: &str) -> Result<Doc> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        Ok(Doc::new(text, self.ents.clone()))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Model double that always fails
#[derive(Debug, Clone)]
pub struct FailingModel {
    message: String,
}

impl FailingModel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl NerModel for FailingModel {
    fn analyze(&self, _text: &str) -> Result<Doc> {
        Err(NefError::Model(self.message.clone()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
