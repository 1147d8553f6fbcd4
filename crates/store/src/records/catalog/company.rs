//! Company catalog descriptor.

use infothek_domain::{Company, CompanyId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Company record bound to one `company` row.
pub type CompanyRecord = Record<Company>;

impl CatalogEntity for Company {
    type Id = CompanyId;

    const TABLE: &'static str = "company";
    const ENTITY: &'static str = "Company";

    fn from_row(row: &TableRow) -> Self {
        Self {
            name: row.get_or_default("name"),
            name_add_on: row.get_or_default("name_add_on"),
        }
    }
}
