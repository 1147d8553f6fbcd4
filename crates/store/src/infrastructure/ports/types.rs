//! Data types crossing the reader port.

use std::collections::HashMap;
use std::fmt;

/// Which column list the reader is asked to fetch.
///
/// The per-table column lists are the reader's schema concern; the record
/// layer forwards the mode untouched and trusts whatever column set comes
/// back. In the current catalog no table differentiates its lists, so
/// both modes return the same columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldMode {
    /// The basic column subset.
    Basic,
    /// The full column set.
    Full,
}

impl FieldMode {
    /// Map the legacy `basic_info_only` flag onto a mode.
    pub fn from_basic_flag(basic_info_only: bool) -> Self {
        if basic_info_only {
            Self::Basic
        } else {
            Self::Full
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One storage row as the reader returns it: column name -> string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    values: HashMap<String, String>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column insert.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Column value, or the empty string when the reader did not return
    /// the column for the requested mode.
    pub fn get_or_default(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_basic_flag_maps_true_to_basic() {
        assert_eq!(FieldMode::from_basic_flag(true), FieldMode::Basic);
        assert_eq!(FieldMode::from_basic_flag(false), FieldMode::Full);
    }

    #[test]
    fn missing_columns_read_as_empty() {
        let row = TableRow::new().with("name", "Arriflex 435");
        assert_eq!(row.get("name"), Some("Arriflex 435"));
        assert_eq!(row.get("lenses"), None);
        assert_eq!(row.get_or_default("lenses"), "");
    }
}
