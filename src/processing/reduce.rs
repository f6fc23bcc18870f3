//! Numeric reductions over a single column of a [`crate::types::TripTable`].

use crate::types::{DataType, TripTable, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Arithmetic mean of numeric values, ignoring nulls.
    Mean,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
}

/// Reduce a `Float64` column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - Returns `Some(Value::Null)` if there are no non-null values (which includes an empty table)
///   or the column is not numeric.
pub fn reduce(table: &TripTable, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = table.schema.index_of(column)?;
    let field = table.schema.fields.get(idx)?;
    if field.data_type != DataType::Float64 {
        return Some(Value::Null);
    }

    let (acc, n) = table.reduce_rows((None, 0_usize), |(acc, n): (Option<f64>, usize), row| {
        match row.get(idx).and_then(Value::as_f64) {
            Some(v) => (Some(fold(op, acc, v)), n + 1),
            None => (acc, n),
        }
    });

    Some(match (op, acc) {
        (_, None) => Value::Null,
        (ReduceOp::Mean, Some(sum)) => Value::Float64(sum / n as f64),
        (_, Some(v)) => Value::Float64(v),
    })
}

fn fold(op: ReduceOp, acc: Option<f64>, v: f64) -> f64 {
    match (op, acc) {
        (_, None) => v,
        (ReduceOp::Min, Some(a)) => a.min(v),
        (ReduceOp::Max, Some(a)) => a.max(v),
        (ReduceOp::Sum | ReduceOp::Mean, Some(a)) => a + v,
    }
}
