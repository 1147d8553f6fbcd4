//! Country entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub english_title: String,
    pub german_title: String,
    pub details: String,
}

impl Country {
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
}
