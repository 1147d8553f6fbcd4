//! The reader port: one capability, "fetch one row by identifier".

use async_trait::async_trait;

use super::error::ReadError;
use super::types::{FieldMode, TableRow};

/// Row access against the backing store.
///
/// Transport, connection lifecycle, and per-table schema - including
/// which columns each [`FieldMode`] selects - are entirely the
/// implementation's concern. A lookup that matches no row is `Ok(None)`,
/// never an error; at most one row exists per identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowReader: Send + Sync {
    /// Fetch the row for `table` whose identifier column equals `id`.
    async fn fetch_one(
        &self,
        table: &'static str,
        id: &str,
        mode: FieldMode,
    ) -> Result<Option<TableRow>, ReadError>;
}
