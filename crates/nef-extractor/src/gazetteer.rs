//! Gazetteer model
//!
//! A dictionary-backed [`NerModel`]: every configured term (and its
//! aliases) is matched as a whole word and tagged with the entry's
//! internal label. It lets the service run without an external model.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use nef_core::{ModelConfig, NefError, Result};

use crate::model::{Doc, NerModel, Span};

const BUILTIN_GAZETTEER: &str = include_str!("data/builtin_gazetteer.toml");

/// Dictionary entry for entity matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub term: String,
    /// Internal label assigned to matches (e.g. "GPE")
    pub label: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl GazetteerEntry {
    pub fn new(term: &str, label: &str, aliases: Vec<&str>) -> Self {
        Self {
            term: term.to_string(),
            label: label.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// On-disk gazetteer layout
#[derive(Debug, Deserialize)]
struct GazetteerFile {
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    entries: Vec<GazetteerEntry>,
}

fn default_language() -> String {
    "eng".to_string()
}

/// Dictionary-based NER model
#[derive(Debug, Clone)]
pub struct GazetteerModel {
    language: String,
    entries: Vec<GazetteerEntry>,
    /// Alternation over all surface forms, longest first
    matcher: Option<Regex>,
    /// Surface form -> internal label
    lookup: HashMap<String, String>,
}

impl GazetteerModel {
    /// Build a model from dictionary entries
    pub fn new(language: impl Into<String>, entries: Vec<GazetteerEntry>) -> Result<Self> {
        let mut lookup: HashMap<String, String> = HashMap::new();

        for entry in &entries {
            if entry.term.trim().is_empty() {
                return Err(NefError::InvalidInput(
                    "gazetteer entry has an empty term".to_string(),
                ));
            }
            if entry.label.trim().is_empty() {
                return Err(NefError::InvalidInput(format!(
                    "gazetteer entry '{}' has an empty label",
                    entry.term
                )));
            }

            let forms = std::iter::once(&entry.term).chain(entry.aliases.iter());
            for form in forms.filter(|f| !f.trim().is_empty()) {
                match lookup.get(form) {
                    Some(existing) if existing != &entry.label => {
                        return Err(NefError::InvalidInput(format!(
                            "'{form}' is listed as both {existing} and {}",
                            entry.label
                        )));
                    }
                    Some(_) => {}
                    None => {
                        lookup.insert(form.clone(), entry.label.clone());
                    }
                }
            }
        }

        let matcher = Self::build_matcher(lookup.keys())?;

        Ok(Self {
            language: language.into(),
            entries,
            matcher,
            lookup,
        })
    }

    /// Load the built-in dictionary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_GAZETTEER)
    }

    /// Parse a gazetteer from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: GazetteerFile = toml::from_str(content)
            .map_err(|e| NefError::ConfigError(format!("invalid gazetteer: {e}")))?;
        Self::new(file.language, file.entries)
    }

    /// Load a gazetteer TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let model = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            entries = model.entries.len(),
            "Loaded gazetteer"
        );
        Ok(model)
    }

    /// Load the configured gazetteer file, or the built-in dictionary
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        match &config.gazetteer_path {
            Some(path) => Self::from_file(path),
            None => {
                let mut model = Self::builtin()?;
                model.language = config.language.clone();
                Ok(model)
            }
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    /// Compile one alternation over all surface forms.
    ///
    /// Longer forms come first so the leftmost-first regex semantics pick the
    /// longest form at any position. Word boundaries are only required on
    /// ends that are word characters.
    fn build_matcher<'a>(forms: impl Iterator<Item = &'a String>) -> Result<Option<Regex>> {
        let mut forms: Vec<&String> = forms.collect();
        if forms.is_empty() {
            return Ok(None);
        }
        forms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternatives: Vec<String> = forms
            .iter()
            .map(|form| {
                let starts_word = form.chars().next().is_some_and(is_word_char);
                let ends_word = form.chars().last().is_some_and(is_word_char);
                format!(
                    "{}{}{}",
                    if starts_word { r"\b" } else { "" },
                    regex::escape(form),
                    if ends_word { r"\b" } else { "" }
                )
            })
            .collect();

        Regex::new(&alternatives.join("|"))
            .map(Some)
            .map_err(|e| NefError::ConfigError(format!("gazetteer pattern failed to compile: {e}")))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl NerModel for GazetteerModel {
    fn analyze(&self, text: &str) -> Result<Doc> {
        let Some(matcher) = &self.matcher else {
            return Ok(Doc::new(text, Vec::new()));
        };

        let ents = matcher
            .find_iter(text)
            .filter_map(|mat| {
                self.lookup
                    .get(mat.as_str())
                    .map(|label| Span::new(mat.as_str(), label.as_str()))
            })
            .collect();

        Ok(Doc::new(text, ents))
    }

    fn name(&self) -> &str {
        "gazetteer"
    }
}
