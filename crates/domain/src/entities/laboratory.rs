//! Laboratory entity - Film labs credited for processing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laboratory {
    pub name: String,
    pub details: String,
}

impl Laboratory {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }
}
