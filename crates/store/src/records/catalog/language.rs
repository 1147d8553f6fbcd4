//! Language catalog descriptor.

use infothek_domain::{Language, LanguageId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Language record bound to one `language` row.
pub type LanguageRecord = Record<Language>;

impl CatalogEntity for Language {
    type Id = LanguageId;

    const TABLE: &'static str = "language";
    const ENTITY: &'static str = "Language";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
