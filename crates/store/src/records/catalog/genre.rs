//! Genre catalog descriptor.

use infothek_domain::{Genre, GenreId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Genre record bound to one `genre` row.
pub type GenreRecord = Record<Genre>;

impl CatalogEntity for Genre {
    type Id = GenreId;

    const TABLE: &'static str = "genre";
    const ENTITY: &'static str = "Genre";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
