//! Infothek domain library.
//!
//! Persistence-free types for the EntertainmentInfothek catalog: one field
//! record per catalog type, string-backed identifier newtypes, and the
//! domain error taxonomy. Row access and the retrieval protocol live in
//! `infothek-store`.

pub mod entities;
pub mod error;
pub mod ids;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    AspectRatio, Camera, Color, Company, Country, Edition, FilmFormat, Genre, Laboratory,
    Language, SoundMix, Status,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{
    AspectRatioId, CameraId, ColorId, CompanyId, CountryId, EditionId, EntityId, FilmFormatId,
    GenreId, LaboratoryId, LanguageId, SoundMixId, StatusId,
};
