//! Infothek store library.
//!
//! The shared retrieval protocol for the EntertainmentInfothek catalog:
//! a generic record bound to one storage row, the terminal status record,
//! and the reader port the records load through.
//!
//! ## Structure
//!
//! - `infrastructure/` - The reader port and its fixture implementation
//! - `records/` - The retrieval protocol and per-type catalog descriptors

pub mod infrastructure;
pub mod records;

pub use infrastructure::ports::{FieldMode, FixtureReader, ReadError, RowReader, TableRow};
pub use records::catalog::{
    AspectRatioRecord, CameraRecord, ColorRecord, CompanyRecord, CountryRecord, EditionRecord,
    FilmFormatRecord, GenreRecord, LaboratoryRecord, LanguageRecord, SoundMixRecord,
};
pub use records::{CatalogEntity, Record, StatusRecord};
