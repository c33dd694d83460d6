//! NEF Extractor - Named entity extraction adapter
//!
//! Forwards text to an injected NLP model, then remaps the model's
//! internal entity labels (PERSON, GPE, ...) into the small public
//! vocabulary shown to users (Person, Location, ...).

pub mod client;
pub mod gazetteer;
pub mod label;
pub mod model;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{ExtractionResult, MappedEntity, NamedEntityClient};
pub use gazetteer::{GazetteerEntry, GazetteerModel};
pub use label::{map_label, PublicLabel, LABEL_MAP};
pub use model::{Doc, NerModel, Span};
