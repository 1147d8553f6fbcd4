//! FilmFormat entity - Negative and print formats (35 mm, 70 mm, ...)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmFormat {
    pub name: String,
    pub details: String,
}

impl FilmFormat {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }
}
