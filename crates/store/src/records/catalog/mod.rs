//! Per-type catalog descriptors.
//!
//! One file per catalog type, each a trivial declaration: the backing
//! table, the typed identifier, and the scalar-field mapping. The status
//! type deliberately has NO descriptor here - it cannot be instantiated
//! through [`Record`](crate::records::Record) and therefore cannot carry
//! a status reference of its own; see [`crate::records::StatusRecord`].

mod aspect_ratio;
mod camera;
mod color;
mod company;
mod country;
mod edition;
mod film_format;
mod genre;
mod laboratory;
mod language;
mod sound_mix;

pub use aspect_ratio::AspectRatioRecord;
pub use camera::CameraRecord;
pub use color::ColorRecord;
pub use company::CompanyRecord;
pub use country::CountryRecord;
pub use edition::EditionRecord;
pub use film_format::FilmFormatRecord;
pub use genre::GenreRecord;
pub use laboratory::LaboratoryRecord;
pub use language::LanguageRecord;
pub use sound_mix::SoundMixRecord;
