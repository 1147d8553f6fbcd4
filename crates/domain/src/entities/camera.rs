//! Camera entity - Camera models used during a production

use serde::{Deserialize, Serialize};

/// A camera model and the lens line-up it was recorded with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub name: String,
    /// Lens line-up as a free-text listing (e.g., "Zeiss Master Primes")
    pub lenses: String,
}

impl Camera {
    pub fn new(name: impl Into<String>, lenses: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lenses: lenses.into(),
        }
    }
}
