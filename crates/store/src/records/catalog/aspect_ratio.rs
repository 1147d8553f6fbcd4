//! AspectRatio catalog descriptor.

use infothek_domain::{AspectRatio, AspectRatioId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// AspectRatio record bound to one `aspect_ratio` row.
pub type AspectRatioRecord = Record<AspectRatio>;

impl CatalogEntity for AspectRatio {
    type Id = AspectRatioId;

    const TABLE: &'static str = "aspect_ratio";
    const ENTITY: &'static str = "AspectRatio";

    fn from_row(row: &TableRow) -> Self {
        Self {
            ratio: row.get_or_default("ratio"),
            details: row.get_or_default("details"),
        }
    }
}
