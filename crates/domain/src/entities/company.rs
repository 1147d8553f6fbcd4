//! Company entity - Production, distribution, and effects companies

use serde::{Deserialize, Serialize};

/// A company credited on a production
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    /// Qualifier appended to the name in credits (e.g., "(uncredited)")
    pub name_add_on: String,
}

impl Company {
    pub fn new(name: impl Into<String>, name_add_on: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_add_on: name_add_on.into(),
        }
    }

    /// The name with its add-on, when one is recorded.
    pub fn full_name(&self) -> String {
        if self.name_add_on.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.name_add_on)
        }
    }
}
