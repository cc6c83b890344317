//! Record types rendered into the page.

use serde::Serialize;

/// A titled HTML fragment rendered as one section of the page.
///
/// `content` is trusted markup written by the site author and is embedded
/// verbatim by templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    /// Identifier, unique within the record sequence
    pub id: String,
    /// Plain-text heading
    pub title: String,
    /// HTML fragment
    pub content: String,
}

impl ContentRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A keyed fragment used for a separate region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuxiliaryContentRecord {
    /// Lookup key, unique within the auxiliary map
    pub key: String,
    /// Plain-text heading
    pub title: String,
    /// HTML fragment
    pub content: String,
}

impl AuxiliaryContentRecord {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
