//! Status entity - Production status values (announced, filming, released, ...)
//!
//! Status is the catalog's one terminal type: every other entity carries
//! a reference to a status row, while a status row references nothing
//! further. The record wrapper in `infothek-store` encodes that asymmetry
//! in its type; this struct only holds the scalar columns.

use serde::{Deserialize, Serialize};

/// A production status, titled in both catalog languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub english_title: String,
    pub german_title: String,
    pub details: String,
}

impl Status {
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
