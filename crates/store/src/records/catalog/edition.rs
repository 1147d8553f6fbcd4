//! Edition catalog descriptor.

use infothek_domain::{Edition, EditionId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Edition record bound to one `edition` row.
pub type EditionRecord = Record<Edition>;

impl CatalogEntity for Edition {
    type Id = EditionId;

    const TABLE: &'static str = "edition";
    const ENTITY: &'static str = "Edition";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
