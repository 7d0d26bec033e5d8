//! SQL value types exchanged with a driver.

use std::fmt;

use chrono::NaiveDateTime;

use super::lob::{ClobLocator, RefCursorHandle};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Data type of a column or of an OUT bind slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// Character data (VARCHAR2, CHAR).
    Varchar2,
    /// Numeric data.
    Number,
    /// Date and time.
    Date,
    /// Character large object.
    Clob,
    /// Cursor opened by a PL/SQL block.
    RefCursor,
}

/// A single column or bind value.
///
/// Numbers are carried as their decimal text so no precision is lost
/// between the driver and the caller; [`to_i64`](SqlValue::to_i64) and
/// [`to_f64`](SqlValue::to_f64) convert on demand. CLOBs and REF CURSORs
/// are carried as handles and materialized through the connection.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    String(String),
    Number(String),
    Date(NaiveDateTime),
    Clob(ClobLocator),
    Cursor(RefCursorHandle),
}

impl SqlValue {
    /// Whether this is the database NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// The type this value carries, `None` for NULL.
    pub fn sql_type(&self) -> Option<SqlType> {
        match self {
            SqlValue::Null => None,
            SqlValue::String(_) => Some(SqlType::Varchar2),
            SqlValue::Number(_) => Some(SqlType::Number),
            SqlValue::Date(_) => Some(SqlType::Date),
            SqlValue::Clob(_) => Some(SqlType::Clob),
            SqlValue::Cursor(_) => Some(SqlType::RefCursor),
        }
    }

    /// Text content of a string or number value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) | SqlValue::Number(s) => Some(s),
            _ => None,
        }
    }

    /// Number value as an integer, if it is one.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Number(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Number value as a float.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Number(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Date and time carried by a date value.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Locator carried by a CLOB value.
    pub fn as_clob(&self) -> Option<&ClobLocator> {
        match self {
            SqlValue::Clob(clob) => Some(clob),
            _ => None,
        }
    }

    /// Handle carried by a REF CURSOR value.
    pub fn as_cursor(&self) -> Option<&RefCursorHandle> {
        match self {
            SqlValue::Cursor(cursor) => Some(cursor),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::String(s) | SqlValue::Number(s) => f.write_str(s),
            SqlValue::Date(dt) => write!(f, "{}", dt.format(DATE_FORMAT)),
            SqlValue::Clob(clob) => write!(f, "<CLOB: {} chars>", clob.size),
            SqlValue::Cursor(cursor) => write!(f, "<REF CURSOR: {}>", cursor.cursor_id),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::String(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::String(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Number(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Number(value.to_string())
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Number(value.to_string())
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Date(value)
    }
}
