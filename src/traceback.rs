//! Deterministic traceback over a filled [`DistanceTable`].
//!
//! Several optimal paths usually lead back from `(n, m)` to `(0, 0)`. The
//! walk picks, at every cell, the first operation in a [`Precedence`] that is
//! consistent with the recorded cost. [`Precedence::REFERENCE`] is
//! Delete, Insert, Match, Convert; scripts produced with it are the
//! canonical output of this crate.

use crate::error::{AlignError, Result};
use crate::ops::{EditScript, Operation};
use crate::table::DistanceTable;

/// Tie-break order used when more than one operation is optimal at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence([Operation; 4]);

impl Precedence {
    /// Delete, then Insert, then Match, then Convert.
    pub const REFERENCE: Precedence = Precedence([
        Operation::Delete,
        Operation::Insert,
        Operation::Match,
        Operation::Convert,
    ]);

    /// Build a custom order. Each operation must appear exactly once.
    ///
    /// ```
    /// use seq_edit::{Operation, Precedence};
    ///
    /// let diag_first = Precedence::new([
    ///     Operation::Match,
    ///     Operation::Convert,
    ///     Operation::Delete,
    ///     Operation::Insert,
    /// ]);
    /// assert!(diag_first.is_ok());
    ///
    /// let dup = Precedence::new([
    ///     Operation::Match,
    ///     Operation::Match,
    ///     Operation::Delete,
    ///     Operation::Insert,
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(order: [Operation; 4]) -> Result<Self> {
        for (k, op) in order.iter().enumerate() {
            if order[..k].contains(op) {
                return Err(AlignError::InvalidPrecedence(*op));
            }
        }
        Ok(Self(order))
    }

    pub fn order(&self) -> &[Operation; 4] {
        &self.0
    }
}

impl Default for Precedence {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Whether `op` is an optimal last step into cell `(i, j)`.
#[inline]
fn admissible<T: PartialEq>(
    table: &DistanceTable,
    a: &[T],
    b: &[T],
    i: usize,
    j: usize,
    op: Operation,
) -> bool {
    let here = table.get(i, j);
    match op {
        Operation::Delete => i > 0 && here == table.get(i - 1, j) + 1,
        Operation::Insert => j > 0 && here == table.get(i, j - 1) + 1,
        Operation::Match => i > 0 && j > 0 && a[i - 1] == b[j - 1],
        Operation::Convert => i > 0 && j > 0 && here == table.get(i - 1, j - 1) + 1,
    }
}

/// Walk `table` back from `(n, m)` to `(0, 0)` and return the operations in
/// forward order.
///
/// `table` must have been built from `a` and `b`.
pub fn traceback<T: PartialEq>(
    table: &DistanceTable,
    a: &[T],
    b: &[T],
    precedence: &Precedence,
) -> EditScript {
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);

    let mut i = a.len();
    let mut j = b.len();
    let mut script = EditScript::with_capacity(i + j);

    while i > 0 || j > 0 {
        // Row 0 always admits Insert, column 0 always admits Delete, and an
        // interior cell is either a match or one more than some neighbour.
        let op = precedence
            .order()
            .iter()
            .copied()
            .find(|&op| admissible(table, a, b, i, j, op))
            .expect("a filled distance table always admits a step");
        if op.consumes_first() {
            i -= 1;
        }
        if op.consumes_second() {
            j -= 1;
        }
        script.push(op);
    }

    script.reverse();
    script
}
