//! Color catalog descriptor.

use infothek_domain::{Color, ColorId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Color record bound to one `color` row.
pub type ColorRecord = Record<Color>;

impl CatalogEntity for Color {
    type Id = ColorId;

    const TABLE: &'static str = "color";
    const ENTITY: &'static str = "Color";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
