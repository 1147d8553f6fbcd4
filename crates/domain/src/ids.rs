//! String-backed identifier newtypes for catalog entities.
//!
//! Identifiers are opaque strings assigned by the store; the empty string
//! is the designated "unset" sentinel for a record constructed without an
//! identifier. No format validation happens here - an identifier that
//! matches no row is still a valid value to attempt retrieval with, and
//! is rejected only through the zero row count at retrieve time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Uniform access to catalog identifiers for generic record code.
pub trait EntityId: Clone + fmt::Debug + fmt::Display + Send + Sync {
    /// Wrap a raw identifier string, present in storage or not.
    fn from_raw(raw: impl Into<String>) -> Self;

    /// The unset sentinel (empty string).
    fn unset() -> Self;

    fn as_str(&self) -> &str;

    fn is_unset(&self) -> bool {
        self.as_str().is_empty()
    }
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl EntityId for $name {
            fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            fn unset() -> Self {
                Self(String::new())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as EntityId>::unset()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Catalog entity IDs
define_id!(CameraId);
define_id!(CompanyId);
define_id!(EditionId);
define_id!(LaboratoryId);
define_id!(SoundMixId);
define_id!(StatusId);

// Sibling catalog IDs
define_id!(AspectRatioId);
define_id!(ColorId);
define_id!(CountryId);
define_id!(FilmFormatId);
define_id!(GenreId);
define_id!(LanguageId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_sentinel_is_the_empty_string() {
        let id = CameraId::unset();
        assert!(id.is_unset());
        assert_eq!(id.as_str(), "");
        assert_eq!(CameraId::default(), id);
    }

    #[test]
    fn raw_identifiers_pass_through_unvalidated() {
        let id = StatusId::from_raw("_xxx");
        assert!(!id.is_unset());
        assert_eq!(id.as_str(), "_xxx");
        assert_eq!(id.to_string(), "_xxx");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = CompanyId::from("_abc");
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, "\"_abc\"");

        let back: CompanyId = serde_json::from_str(&json).expect("deserialize id");
        assert_eq!(back, id);
    }
}
