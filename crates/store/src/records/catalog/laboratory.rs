//! Laboratory catalog descriptor.

use infothek_domain::{Laboratory, LaboratoryId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Laboratory record bound to one `laboratory` row.
pub type LaboratoryRecord = Record<Laboratory>;

impl CatalogEntity for Laboratory {
    type Id = LaboratoryId;

    const TABLE: &'static str = "laboratory";
    const ENTITY: &'static str = "Laboratory";

    fn from_row(row: &TableRow) -> Self {
        Self {
            name: row.get_or_default("name"),
            details: row.get_or_default("details"),
        }
    }
}
