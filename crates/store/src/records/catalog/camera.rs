//! Camera catalog descriptor.

use infothek_domain::{Camera, CameraId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// Camera record bound to one `camera` row.
pub type CameraRecord = Record<Camera>;

impl CatalogEntity for Camera {
    type Id = CameraId;

    const TABLE: &'static str = "camera";
    const ENTITY: &'static str = "Camera";

    fn from_row(row: &TableRow) -> Self {
        Self {
            name: row.get_or_default("name"),
            lenses: row.get_or_default("lenses"),
        }
    }
}
