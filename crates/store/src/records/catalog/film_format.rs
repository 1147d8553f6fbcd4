//! FilmFormat catalog descriptor.

use infothek_domain::{FilmFormat, FilmFormatId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// FilmFormat record bound to one `film_format` row.
pub type FilmFormatRecord = Record<FilmFormat>;

impl CatalogEntity for FilmFormat {
    type Id = FilmFormatId;

    const TABLE: &'static str = "film_format";
    const ENTITY: &'static str = "FilmFormat";

    fn from_row(row: &TableRow) -> Self {
        Self {
            name: row.get_or_default("name"),
            details: row.get_or_default("details"),
        }
    }
}
