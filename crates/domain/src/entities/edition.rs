//! Edition entity - Release editions (theatrical cut, director's cut, ...)

use serde::{Deserialize, Serialize};

/// A release edition, titled in both catalog languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub english_title: String,
    pub german_title: String,
    pub details: String,
}

impl Edition {
    pub fn new(
        english_title: impl Into<String>,
        german_title: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            english_title: english_title.into(),
            german_title: german_title.into(),
            details: details.into(),
        }
    }

    /// The German title, falling back to English when none is recorded.
    pub fn display_title(&self) -> &str {
        if self.german_title.is_empty() {
            &self.english_title
        } else {
            &self.german_title
        }
    }
}
