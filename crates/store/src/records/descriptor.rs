//! The per-type catalog descriptor.

use infothek_domain::ids::EntityId;

use crate::infrastructure::ports::TableRow;

/// Column holding the foreign key into the status table.
pub const STATUS_COLUMN: &str = "status";

/// Column holding the row's last-updated stamp, populated for every mode.
pub const LAST_UPDATED_COLUMN: &str = "last_updated";

/// A catalog type retrievable through the shared protocol.
///
/// Implementations are trivial declarations: the backing table, a display
/// name for logs, the typed identifier, and the scalar-field mapping from
/// a fetched row. Missing columns read as empty strings - the record
/// layer trusts whatever column set the reader returned for the requested
/// mode and never re-checks field counts.
///
/// The status type does NOT implement this trait: every implementor gets
/// a status reference through [`Record`](crate::records::Record), and the
/// terminal [`StatusRecord`](crate::records::StatusRecord) stays outside
/// the generic protocol so a status cannot reference a status.
pub trait CatalogEntity: Sized + Send + Sync {
    /// Typed identifier for this catalog type.
    type Id: EntityId;

    /// Backing table in the store.
    const TABLE: &'static str;

    /// Display name for logs and errors.
    const ENTITY: &'static str;

    /// Map one fetched row onto the scalar field record.
    fn from_row(row: &TableRow) -> Self;
}
