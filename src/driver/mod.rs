//! Database driver boundary used by the sample programs.
//!
//! The samples never speak a wire protocol themselves. They submit SQL text
//! with binds through the [`Connection`] trait and consume typed results;
//! [`Driver`] turns resolved credentials into live connections. Any backend
//! that can execute the statements (a native client, a network driver, a
//! scripted stand-in under test) can sit behind these traits.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use futures::Stream;

use crate::access::Credentials;
use crate::error::Result;

mod lob;
mod row;
mod value;

pub use lob::{ClobLocator, RefCursorHandle};
pub use row::{Column, ColumnSet, Row};
pub use value::{SqlType, SqlValue};

/// A single bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    /// Input value bound into the statement.
    In(SqlValue),
    /// Output slot the statement fills.
    Out(SqlType),
}

/// Bind parameters for one statement execution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Params {
    /// No binds.
    #[default]
    None,
    /// Positional binds, in placeholder order.
    Positional(Vec<Bind>),
    /// Named binds.
    Named(Vec<(String, Bind)>),
}

/// Result of a single statement execution.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    /// Column information for a query; empty for DML and PL/SQL.
    pub columns: Arc<ColumnSet>,
    /// Rows returned by a query.
    pub rows: Vec<Row>,
    /// Rows affected by a DML statement.
    pub rows_affected: u64,
    /// OUT bind values, in bind declaration order.
    pub outs: Vec<SqlValue>,
}

impl ExecResult {
    /// Result of a DML statement.
    pub fn affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            ..Self::default()
        }
    }

    /// Result of a query.
    pub fn query(columns: Arc<ColumnSet>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Result of a statement with OUT binds.
    pub fn with_outs(outs: Vec<SqlValue>) -> Self {
        Self {
            outs,
            ..Self::default()
        }
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.column_names()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl IntoIterator for ExecResult {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExecResult {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Connection factory.
pub trait Driver {
    /// The connection type this driver produces.
    type Conn: Connection;

    /// Open a connection for the given credentials.
    fn connect(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Self::Conn>> + Send;
}

/// A live database connection as the sample programs see it.
///
/// All statement methods take `&mut self`: one statement at a time per
/// connection, matching the way the samples use their sessions.
pub trait Connection {
    /// Chunk stream produced by [`read_clob`](Connection::read_clob).
    type ClobStream: Stream<Item = Result<Bytes>> + Send + Unpin;

    /// Execute one statement, optionally with binds.
    ///
    /// OUT bind values come back in [`ExecResult::outs`], in declaration
    /// order.
    fn execute(
        &mut self,
        sql: &str,
        params: Params,
    ) -> impl Future<Output = Result<ExecResult>> + Send;

    /// Execute one DML statement once per batch row (array binding).
    ///
    /// Returns the total number of rows affected.
    fn execute_many(
        &mut self,
        sql: &str,
        batch: Vec<Vec<SqlValue>>,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// Open a chunked read over a CLOB.
    fn read_clob(
        &mut self,
        clob: &ClobLocator,
    ) -> impl Future<Output = Result<Self::ClobStream>> + Send;

    /// Fetch all rows of a REF CURSOR returned by an OUT bind.
    fn fetch_ref_cursor(
        &mut self,
        cursor: RefCursorHandle,
    ) -> impl Future<Output = Result<ExecResult>> + Send;

    /// Close the connection and release its resources.
    fn close(self) -> impl Future<Output = Result<()>> + Send
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_result_affected() {
        let result = ExecResult::affected(3);
        assert_eq!(result.rows_affected, 3);
        assert!(result.is_empty());
        assert!(result.outs.is_empty());
    }

    #[test]
    fn test_exec_result_query_iteration() {
        let columns = Arc::new(ColumnSet::new(vec![Column::new("ID", SqlType::Number)]));
        let rows = vec![
            Row::new(vec![SqlValue::from(1)], columns.clone()),
            Row::new(vec![SqlValue::from(2)], columns.clone()),
        ];
        let result = ExecResult::query(columns, rows);

        assert_eq!(result.len(), 2);
        assert_eq!(result.column_names(), vec!["ID"]);
        let ids: Vec<i64> = result
            .iter()
            .filter_map(|row| row.get(0).and_then(SqlValue::to_i64))
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_exec_result_outs() {
        let result = ExecResult::with_outs(vec![SqlValue::from("SMITH"), SqlValue::from(0)]);
        assert_eq!(result.outs.len(), 2);
        assert_eq!(result.outs[1].to_i64(), Some(0));
    }

    #[test]
    fn test_params_default_is_none() {
        assert_eq!(Params::default(), Params::None);
    }
}
