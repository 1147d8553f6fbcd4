//! Fixture implementation of the reader port.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::ReadError;
use super::reader::RowReader;
use super::types::{FieldMode, TableRow};

/// In-memory reader over seeded rows, for tests and examples.
///
/// Ignores the field mode: every stored column comes back for either
/// mode, matching a catalog in which no table differentiates its column
/// lists. Rows can be inserted and removed after the reader has been
/// shared, to simulate external mutation of storage between retrieves.
#[derive(Debug, Default)]
pub struct FixtureReader {
    rows: Mutex<HashMap<(&'static str, String), TableRow>>,
}

impl FixtureReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the row for `id` in `table`.
    pub fn insert(&self, table: &'static str, id: impl Into<String>, row: TableRow) {
        self.rows
            .lock()
            .expect("fixture rows mutex poisoned")
            .insert((table, id.into()), row);
    }

    /// Drop the row for `id` in `table`, if seeded.
    pub fn remove(&self, table: &'static str, id: &str) {
        self.rows
            .lock()
            .expect("fixture rows mutex poisoned")
            .remove(&(table, id.to_string()));
    }
}

#[async_trait]
impl RowReader for FixtureReader {
    async fn fetch_one(
        &self,
        table: &'static str,
        id: &str,
        _mode: FieldMode,
    ) -> Result<Option<TableRow>, ReadError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| ReadError::database("fetch_one", "fixture rows mutex poisoned"))?;
        Ok(rows.get(&(table, id.to_string())).cloned())
    }
}
