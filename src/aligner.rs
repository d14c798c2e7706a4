//! Global edit-distance alignment.
//!
//! [`align`] fills a full distance table, walks it back with the reference
//! tie-break precedence and returns the distance together with one optimal
//! [`EditScript`]. The table lives only for the duration of the call.

use crate::ops::EditScript;
use crate::table::DistanceTable;
use crate::traceback::{traceback, Precedence};

/// Result of aligning two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Minimum number of unit-cost edits.
    pub distance: usize,
    /// One optimal script; `operations.cost() == distance`.
    pub operations: EditScript,
}

/// Aligner configured with a tie-break precedence.
///
/// Use [`AlignerBuilder`](crate::builder::AlignerBuilder) to pick a
/// non-default precedence; [`Aligner::new`] uses
/// [`Precedence::REFERENCE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aligner {
    precedence: Precedence,
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(precedence: Precedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> &Precedence {
        &self.precedence
    }

    /// Align `a` against `b`.
    ///
    /// Total over all finite inputs, including empty ones. Runs in
    /// O(|a|·|b|) time and space.
    pub fn align<T: PartialEq>(&self, a: &[T], b: &[T]) -> Alignment {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("align", n = a.len(), m = b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let _fill = tracing::trace_span!("fill_table").entered();
            DistanceTable::build(a, b)
        };

        let operations = {
            #[cfg(feature = "tracing")]
            let _walk = tracing::trace_span!("traceback").entered();
            traceback(&table, a, b, &self.precedence)
        };
        let distance = table.distance();

        #[cfg(feature = "tracing")]
        tracing::debug!(distance, ops = operations.len(), "alignment complete");

        debug_assert_eq!(operations.cost(), distance);
        Alignment {
            distance,
            operations,
        }
    }
}

/// Align `a` against `b` with the reference precedence.
///
/// ```
/// use seq_edit::align;
///
/// let aln = align(b"AC", b"A");
/// assert_eq!(aln.distance, 1);
/// assert_eq!(aln.operations.to_string(), "MD");
/// ```
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> Alignment {
    Aligner::new().align(a, b)
}
