//! The terminal status record.
//!
//! Status is the one catalog type without a status reference of its own:
//! the reference chain stops at depth one. It is a dedicated type rather
//! than a [`Record`](super::Record) instantiation, so the missing
//! self-reference is a property of the type system, not a convention.

use std::fmt;
use std::sync::Arc;

use infothek_domain::ids::EntityId;
use infothek_domain::{DomainError, Status, StatusId};

use super::descriptor::LAST_UPDATED_COLUMN;
use crate::infrastructure::ports::{FieldMode, ReadError, RowReader, TableRow};

/// Backing table for status rows.
pub const STATUS_TABLE: &str = "status";

fn status_from_row(row: &TableRow) -> Status {
    Status {
        english_title: row.get_or_default("english_title"),
        german_title: row.get_or_default("german_title"),
        details: row.get_or_default("details"),
    }
}

/// A status record bound to one `status` row.
///
/// Same lifecycle as the generic record - entirely unset until a
/// successful [`retrieve`](Self::retrieve), cleared again on a miss -
/// minus any nested status resolution.
pub struct StatusRecord {
    id: StatusId,
    reader: Arc<dyn RowReader>,
    fields: Option<Status>,
    last_updated: Option<String>,
}

impl StatusRecord {
    /// Create an unbound status record (unset identifier, nothing loaded).
    pub fn new(reader: Arc<dyn RowReader>) -> Self {
        Self {
            id: StatusId::unset(),
            reader,
            fields: None,
            last_updated: None,
        }
    }

    /// Bind a status record to an identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` when `id` is the unset
    /// sentinel; that state is reserved for [`StatusRecord::new`].
    pub fn with_id(reader: Arc<dyn RowReader>, id: StatusId) -> Result<Self, DomainError> {
        if id.is_unset() {
            return Err(DomainError::invalid_argument(
                "Status identifier must not be empty",
            ));
        }
        let mut record = Self::new(reader);
        record.id = id;
        Ok(record)
    }

    /// The bound identifier (unset sentinel for an unbound record).
    pub fn id(&self) -> &StatusId {
        &self.id
    }

    /// Scalar fields, populated by the last successful retrieve.
    pub fn fields(&self) -> Option<&Status> {
        self.fields.as_ref()
    }

    /// Last-updated stamp, populated by the last successful retrieve.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Whether the last retrieve populated this record.
    pub fn is_populated(&self) -> bool {
        self.fields.is_some()
    }

    /// Load this status row from storage.
    ///
    /// Same contract as [`Record::retrieve`](super::Record::retrieve):
    /// the returned count is 1 (all fields populated from the row) or 0
    /// (record entirely unset), and reader failures pass through
    /// untranslated.
    pub async fn retrieve(&mut self, mode: FieldMode) -> Result<u64, ReadError> {
        // Earlier state is dropped up front so no partially stale record
        // survives a miss or an error path.
        self.clear();

        let row = self
            .reader
            .fetch_one(STATUS_TABLE, self.id.as_str(), mode)
            .await?;
        let Some(row) = row else {
            tracing::debug!(table = STATUS_TABLE, id = %self.id, "no matching row");
            return Ok(0);
        };

        self.fields = Some(status_from_row(&row));
        self.last_updated = Some(row.get_or_default(LAST_UPDATED_COLUMN));
        tracing::debug!(table = STATUS_TABLE, id = %self.id, mode = %mode, "loaded row");
        Ok(1)
    }

    /// Resolve a parent row's status reference.
    ///
    /// An empty status column yields an unbound record and no lookup; a
    /// recorded identifier is retrieved with the parent's mode, and a
    /// zero-count outcome is kept as the empty state (identifier set,
    /// fields unset). Reader errors propagate to the parent retrieve.
    pub(super) async fn resolve(
        reader: Arc<dyn RowReader>,
        id: StatusId,
        mode: FieldMode,
    ) -> Result<Self, ReadError> {
        if id.is_unset() {
            return Ok(Self::new(reader));
        }

        let mut record = Self {
            id,
            reader,
            fields: None,
            last_updated: None,
        };
        record.retrieve(mode).await?;
        Ok(record)
    }

    fn clear(&mut self) {
        self.fields = None;
        self.last_updated = None;
    }
}

impl fmt::Debug for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusRecord")
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("last_updated", &self.last_updated)
            .finish_non_exhaustive()
    }
}
