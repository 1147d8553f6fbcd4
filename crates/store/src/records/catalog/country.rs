//! Country catalog descriptor.

use infothek_domain::{Country, CountryId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Country record bound to one `country` row.
pub type CountryRecord = Record<Country>;

impl CatalogEntity for Country {
    type Id = CountryId;

    const TABLE: &'static str = "country";
    const ENTITY: &'static str = "Country";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
