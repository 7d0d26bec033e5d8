//! The sample program bodies.
//!
//! Each submodule is one sample: a `NAME` for the usage text and an async
//! `run` body that drives a [`Connection`](crate::driver::Connection)
//! obtained by the harness.

pub mod lobs;
pub mod procedures;
pub mod queries_plsql;
pub mod simple;
pub mod sql;

use crate::driver::{ExecResult, SqlValue};

/// First column of the first row as an integer, the way the samples read
/// single-value results like `SELECT COUNT(*)`.
pub(crate) fn scalar_i64(result: &ExecResult) -> Option<i64> {
    result
        .rows
        .first()
        .and_then(|row| row.get(0))
        .and_then(SqlValue::to_i64)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::driver::{Column, ColumnSet, Row, SqlType};

    #[test]
    fn test_scalar_i64() {
        let columns = Arc::new(ColumnSet::new(vec![Column::new(
            "COUNT(*)",
            SqlType::Number,
        )]));
        let result = ExecResult::query(
            columns.clone(),
            vec![Row::new(vec![SqlValue::from(100)], columns)],
        );
        assert_eq!(scalar_i64(&result), Some(100));
        assert_eq!(scalar_i64(&ExecResult::affected(1)), None);
    }
}
