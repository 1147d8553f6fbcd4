//! SoundMix catalog descriptor.

use infothek_domain::{SoundMix, SoundMixId};

use crate::infrastructure::ports::TableRow;
use crate::records::descriptor::CatalogEntity;
use crate::records::Record;

/// SoundMix record bound to one `sound_mix` row.
pub type SoundMixRecord = Record<SoundMix>;

impl CatalogEntity for SoundMix {
    type Id = SoundMixId;

    const TABLE: &'static str = "sound_mix";
    const ENTITY: &'static str = "SoundMix";

    fn from_row(row: &TableRow) -> Self {
        Self {
            english_title: row.get_or_default("english_title"),
            german_title: row.get_or_default("german_title"),
            details: row.get_or_default("details"),
        }
    }
}
