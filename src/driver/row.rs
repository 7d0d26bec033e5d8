//! Result rows and their column descriptions.

use std::sync::Arc;

use crate::error::{Error, Result};

use super::value::{SqlType, SqlValue};

/// Description of one column in a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name reported by the driver, uppercase for unquoted identifiers.
    pub name: String,
    /// Declared data type.
    pub data_type: SqlType,
}

impl Column {
    /// Describe a column by name and declared type.
    pub fn new(name: impl Into<String>, data_type: SqlType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Column descriptions shared by every row of a result set.
///
/// Rows hold an [`Arc`] to the set, so fetching a thousand rows stores
/// the metadata once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    /// Column descriptions in select-list order.
    pub columns: Vec<Column>,
}

impl ColumnSet {
    /// Wrap a list of column descriptions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Names of all columns, in select-list order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns in the set.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set describes no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Description of the column at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Position of a column by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        // Identifier names are ASCII.
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// One fetched row.
#[derive(Debug, Clone)]
pub struct Row {
    values: Vec<SqlValue>,
    columns: Arc<ColumnSet>,
}

impl Row {
    /// Build a row over shared column descriptions.
    pub fn new(values: Vec<SqlValue>, columns: Arc<ColumnSet>) -> Self {
        Self { values, columns }
    }

    /// Value at a 0-based column index.
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Value at a 0-based column index, or an error naming the bad index.
    pub fn try_get(&self, index: usize) -> Result<&SqlValue> {
        self.values
            .get(index)
            .ok_or_else(|| Error::ColumnIndexOutOfBounds {
                index,
                count: self.values.len(),
            })
    }

    /// Value of the named column, matched case-insensitively.
    pub fn get_by_name(&self, name: &str) -> Option<&SqlValue> {
        self.columns
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Value of the named column, or an error naming the unknown column.
    pub fn try_get_by_name(&self, name: &str) -> Result<&SqlValue> {
        self.get_by_name(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })
    }

    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in select-list order.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// The column descriptions this row was fetched under.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Iterator over the row's values.
    pub fn iter(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = SqlValue;
    type IntoIter = std::vec::IntoIter<SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a SqlValue;
    type IntoIter = std::slice::Iter<'a, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
