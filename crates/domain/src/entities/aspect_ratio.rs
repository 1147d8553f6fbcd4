//! AspectRatio entity

use serde::{Deserialize, Serialize};

/// A projection aspect ratio (e.g., "2.35 : 1")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRatio {
    pub ratio: String,
    pub details: String,
}

impl AspectRatio {
    pub fn new(ratio: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            ratio: ratio.into(),
            details: details.into(),
        }
    }
}
