//! The generic catalog record and its retrieval protocol.

use std::fmt;
use std::sync::Arc;

use infothek_domain::ids::EntityId;
use infothek_domain::{DomainError, StatusId};

use super::descriptor::{CatalogEntity, LAST_UPDATED_COLUMN, STATUS_COLUMN};
use super::status::StatusRecord;
use crate::infrastructure::ports::{FieldMode, ReadError, RowReader};

/// A catalog record bound to one storage row.
///
/// Holds a typed identifier and the reader it loads through, both fixed
/// at construction. All loaded state (`fields`, `status`, `last_updated`)
/// is unset until a successful [`retrieve`](Self::retrieve) and cleared
/// again when a later retrieve matches no row: a record is always
/// entirely unset or entirely populated, never partial.
pub struct Record<E: CatalogEntity> {
    id: E::Id,
    reader: Arc<dyn RowReader>,
    fields: Option<E>,
    status: Option<StatusRecord>,
    last_updated: Option<String>,
}

impl<E: CatalogEntity> Record<E> {
    /// Create an unbound record (unset identifier, nothing loaded).
    pub fn new(reader: Arc<dyn RowReader>) -> Self {
        Self {
            id: E::Id::unset(),
            reader,
            fields: None,
            status: None,
            last_updated: None,
        }
    }

    /// Bind a record to an identifier.
    ///
    /// The identifier is not checked against storage here - an id that
    /// matches no row is rejected at retrieve time through the zero row
    /// count, never at construction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` when `id` is the unset
    /// sentinel; that state is reserved for [`Record::new`].
    pub fn with_id(reader: Arc<dyn RowReader>, id: E::Id) -> Result<Self, DomainError> {
        if id.is_unset() {
            return Err(DomainError::invalid_argument(format!(
                "{} identifier must not be empty",
                E::ENTITY
            )));
        }
        let mut record = Self::new(reader);
        record.id = id;
        Ok(record)
    }

    /// The bound identifier (unset sentinel for an unbound record).
    pub fn id(&self) -> &E::Id {
        &self.id
    }

    /// Scalar fields, populated by the last successful retrieve.
    pub fn fields(&self) -> Option<&E> {
        self.fields.as_ref()
    }

    /// The related status record, populated by the last successful
    /// retrieve. Distinguishes three states: `None` (never retrieved, or
    /// last retrieve missed), a record with an unset id (row carries no
    /// status), and a record with a set id (resolved, possibly to the
    /// empty state when the referenced status row is gone).
    pub fn status(&self) -> Option<&StatusRecord> {
        self.status.as_ref()
    }

    /// Last-updated stamp, populated by the last successful retrieve for
    /// either mode.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Whether the last retrieve populated this record.
    pub fn is_populated(&self) -> bool {
        self.fields.is_some()
    }

    /// Load this record's row from storage.
    ///
    /// Returns the matched row count: `1` populates every scalar field,
    /// the status reference, and the last-updated stamp from the row; `0`
    /// leaves the record entirely unset. Reader failures pass through
    /// untranslated. Calling retrieve again re-executes the lookup and
    /// replaces the loaded state with the latest storage state.
    pub async fn retrieve(&mut self, mode: FieldMode) -> Result<u64, ReadError> {
        // Earlier state is dropped up front so no partially stale record
        // survives a miss or an error path.
        self.clear();

        let row = self
            .reader
            .fetch_one(E::TABLE, self.id.as_str(), mode)
            .await?;
        let Some(row) = row else {
            tracing::debug!(table = E::TABLE, id = %self.id, "no matching row");
            return Ok(0);
        };

        let status_id = StatusId::from_raw(row.get_or_default(STATUS_COLUMN));
        let status = StatusRecord::resolve(Arc::clone(&self.reader), status_id, mode).await?;

        self.fields = Some(E::from_row(&row));
        self.status = Some(status);
        self.last_updated = Some(row.get_or_default(LAST_UPDATED_COLUMN));
        tracing::debug!(table = E::TABLE, id = %self.id, mode = %mode, "loaded row");
        Ok(1)
    }

    fn clear(&mut self) {
        self.fields = None;
        self.status = None;
        self.last_updated = None;
    }
}

impl<E: CatalogEntity + fmt::Debug> fmt::Debug for Record<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("entity", &E::ENTITY)
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("status", &self.status)
            .field("last_updated", &self.last_updated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::infrastructure::ports::{FixtureReader, MockRowReader, TableRow};
    use crate::records::catalog::CameraRecord;
    use crate::records::status::STATUS_TABLE;
    use infothek_domain::{Camera, CameraId, Status};

    fn camera_row() -> TableRow {
        TableRow::new()
            .with("name", "Camera Name X")
            .with("lenses", "Camera Lenses X")
            .with(STATUS_COLUMN, "_xxx")
            .with(LAST_UPDATED_COLUMN, "Camera LastUpdated X")
    }

    fn status_row() -> TableRow {
        TableRow::new()
            .with("english_title", "Status EnglishTitle X")
            .with("german_title", "Status GermanTitle X")
            .with("details", "Status Details X")
            .with(LAST_UPDATED_COLUMN, "Status LastUpdated X")
    }

    #[test]
    fn with_id_rejects_the_unset_sentinel() {
        let reader = Arc::new(FixtureReader::new());
        let err =
            CameraRecord::with_id(reader, CameraId::unset()).expect_err("unset id rejected");
        assert_eq!(
            err,
            DomainError::invalid_argument("Camera identifier must not be empty")
        );
    }

    #[test]
    fn unbound_records_start_unset() {
        let record = CameraRecord::new(Arc::new(FixtureReader::new()));
        assert!(record.id().is_unset());
        assert!(record.fields().is_none());
        assert!(record.status().is_none());
        assert!(record.last_updated().is_none());
    }

    #[test]
    fn binding_does_not_consult_storage() {
        // "_ghost" matches no row; binding succeeds anyway.
        let record = CameraRecord::with_id(Arc::new(FixtureReader::new()), "_ghost".into())
            .expect("bind id");
        assert_eq!(record.id().as_str(), "_ghost");
        assert!(record.fields().is_none());
        assert!(record.status().is_none());
        assert!(record.last_updated().is_none());
    }

    #[tokio::test]
    async fn an_unbound_record_retrieves_zero() {
        // The unset sentinel is a valid lookup key; it just matches nothing.
        let reader = Arc::new(FixtureReader::new());
        reader.insert("camera", "_xxx", camera_row());

        let mut record = CameraRecord::new(reader);
        let count = record.retrieve(FieldMode::Full).await.expect("retrieve");
        assert_eq!(count, 0);
        assert!(record.fields().is_none());
    }

    #[tokio::test]
    async fn retrieve_miss_returns_zero_for_either_mode() {
        let reader = Arc::new(FixtureReader::new());
        let mut record =
            CameraRecord::with_id(reader.clone(), "_aaa".into()).expect("bind id");

        for mode in [FieldMode::Basic, FieldMode::Full] {
            let count = record.retrieve(mode).await.expect("retrieve");
            assert_eq!(count, 0);
            assert!(record.fields().is_none());
            assert!(record.status().is_none());
            assert!(record.last_updated().is_none());
        }
    }

    #[tokio::test]
    async fn retrieve_hit_populates_every_field() {
        let reader = Arc::new(FixtureReader::new());
        reader.insert("camera", "_xxx", camera_row());
        reader.insert(STATUS_TABLE, "_xxx", status_row());

        let mut record =
            CameraRecord::with_id(reader.clone(), "_xxx".into()).expect("bind id");

        for mode in [FieldMode::Basic, FieldMode::Full] {
            let count = record.retrieve(mode).await.expect("retrieve");
            assert_eq!(count, 1);
            assert_eq!(
                record.fields(),
                Some(&Camera::new("Camera Name X", "Camera Lenses X"))
            );
            assert_eq!(record.last_updated(), Some("Camera LastUpdated X"));

            let status = record.status().expect("status resolved");
            assert_eq!(status.id().as_str(), "_xxx");
            assert_eq!(
                status.fields(),
                Some(&Status::new(
                    "Status EnglishTitle X",
                    "Status GermanTitle X",
                    "Status Details X"
                ))
            );
            assert_eq!(status.last_updated(), Some("Status LastUpdated X"));
        }
    }

    #[tokio::test]
    async fn the_requested_mode_reaches_the_reader_unchanged() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut reader = MockRowReader::new();
        reader
            .expect_fetch_one()
            .times(2)
            .returning(move |_, _, mode| {
                sink.lock().expect("mode sink").push(mode);
                Ok(None)
            });

        let mut record =
            CameraRecord::with_id(Arc::new(reader), "_xxx".into()).expect("bind id");
        record.retrieve(FieldMode::Basic).await.expect("retrieve");
        record.retrieve(FieldMode::Full).await.expect("retrieve");

        assert_eq!(
            *seen.lock().expect("mode sink"),
            vec![FieldMode::Basic, FieldMode::Full]
        );
    }

    #[tokio::test]
    async fn a_missing_status_row_does_not_fail_the_parent() {
        let reader = Arc::new(FixtureReader::new());
        // Camera row references status "_xxx", but no such status row exists.
        reader.insert("camera", "_xxx", camera_row());

        let mut record =
            CameraRecord::with_id(reader.clone(), "_xxx".into()).expect("bind id");
        let count = record.retrieve(FieldMode::Full).await.expect("retrieve");

        assert_eq!(count, 1);
        let status = record.status().expect("status slot present");
        assert_eq!(status.id().as_str(), "_xxx");
        assert!(status.fields().is_none());
        assert!(status.last_updated().is_none());
    }

    #[tokio::test]
    async fn an_empty_status_column_skips_the_nested_lookup() {
        let mut reader = MockRowReader::new();
        reader.expect_fetch_one().times(1).returning(|table, _, _| {
            assert_eq!(table, "camera");
            Ok(Some(
                TableRow::new()
                    .with("name", "Panavision Panaflex")
                    .with("lenses", "Primo")
                    .with(LAST_UPDATED_COLUMN, "2004-11-02"),
            ))
        });

        let mut record =
            CameraRecord::with_id(Arc::new(reader), "_xxx".into()).expect("bind id");
        let count = record.retrieve(FieldMode::Full).await.expect("retrieve");

        assert_eq!(count, 1);
        let status = record.status().expect("status slot present");
        assert!(status.id().is_unset());
        assert!(status.fields().is_none());
    }

    #[tokio::test]
    async fn a_nested_reader_error_propagates() {
        let mut reader = MockRowReader::new();
        reader.expect_fetch_one().returning(|table, _, _| {
            if table == "camera" {
                Ok(Some(camera_row()))
            } else {
                Err(ReadError::Unavailable)
            }
        });

        let mut record =
            CameraRecord::with_id(Arc::new(reader), "_xxx".into()).expect("bind id");
        let err = record
            .retrieve(FieldMode::Full)
            .await
            .expect_err("reader failure propagates");

        assert!(matches!(err, ReadError::Unavailable));
        assert!(record.fields().is_none());
        assert!(record.status().is_none());
        assert!(record.last_updated().is_none());
    }

    #[tokio::test]
    async fn retrieve_is_idempotent_against_unchanged_storage() {
        let reader = Arc::new(FixtureReader::new());
        reader.insert("camera", "_xxx", camera_row());
        reader.insert(STATUS_TABLE, "_xxx", status_row());

        let mut record =
            CameraRecord::with_id(reader.clone(), "_xxx".into()).expect("bind id");

        let first = record.retrieve(FieldMode::Full).await.expect("retrieve");
        let first_fields = record.fields().cloned();
        let second = record.retrieve(FieldMode::Full).await.expect("retrieve");

        assert_eq!(first, second);
        assert_eq!(record.fields().cloned(), first_fields);
    }

    #[tokio::test]
    async fn retrieve_overwrites_after_storage_mutation() {
        let reader = Arc::new(FixtureReader::new());
        reader.insert("camera", "_xxx", camera_row());
        reader.insert(STATUS_TABLE, "_xxx", status_row());

        let mut record =
            CameraRecord::with_id(reader.clone(), "_xxx".into()).expect("bind id");
        assert_eq!(record.retrieve(FieldMode::Full).await.expect("retrieve"), 1);
        assert!(record.is_populated());

        reader.remove("camera", "_xxx");
        assert_eq!(record.retrieve(FieldMode::Full).await.expect("retrieve"), 0);
        assert!(!record.is_populated());
        assert!(record.fields().is_none());
        assert!(record.status().is_none());
        assert!(record.last_updated().is_none());
    }
}
