//! Label mapping from model taxonomy to public categories

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User-facing entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PublicLabel {
    Person,
    Group,
    Location,
    Language,
}

impl PublicLabel {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Group => "Group",
            Self::Location => "Location",
            Self::Language => "Language",
        }
    }
}

impl std::fmt::Display for PublicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal label -> public label, in table order
pub const LABEL_MAP: &[(&str, PublicLabel)] = &[
    ("PERSON", PublicLabel::Person),
    ("NORP", PublicLabel::Group),
    ("LOC", PublicLabel::Location),
    ("GPE", PublicLabel::Location),
    ("LANGUAGE", PublicLabel::Language),
];

/// Map a model label to its public category.
///
/// Lookup is an exact, case-sensitive match. Labels outside the table
/// return `None`; that is a normal outcome, not an error.
pub fn map_label(label: &str) -> Option<PublicLabel> {
    LABEL_MAP
        .iter()
        .find(|(internal, _)| *internal == label)
        .map(|(_, public)| *public)
}
