//! Closed-form count of derived columns.

use crate::ops::{Operation, OperationSet};

/// Number of unordered pairs of distinct columns, `n choose 2`.
pub fn pair_count(num_cols: usize) -> usize {
    num_cols * num_cols.saturating_sub(1) / 2
}

/// Number of columns one operation contributes for `num_cols` features.
pub fn operation_count(num_cols: usize, op: Operation) -> usize {
    let pairs = pair_count(num_cols);
    match op {
        Operation::Multiply => pairs + num_cols,
        Operation::Divide => 2 * pairs,
        Operation::Add | Operation::Subtract => pairs,
    }
}

/// Number of derived columns [`generate`](crate::generate) produces.
///
/// Contributions of the enabled operations are independent and summed; an
/// empty set plans zero columns.
pub fn plan(num_cols: usize, ops: &OperationSet) -> usize {
    ops.iter().map(|op| operation_count(num_cols, op)).sum()
}
