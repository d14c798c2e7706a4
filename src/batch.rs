//! Aligning many independent pairs.
//!
//! Each pair owns its own table, so pairs can be aligned concurrently with no
//! coordination. With the `parallel` feature the work is spread over rayon's
//! global pool; results always come back in input order.

use crate::aligner::{Aligner, Alignment};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Aligner {
    /// Align every `(a, b)` pair in `pairs`.
    #[cfg(feature = "parallel")]
    pub fn align_batch<S, T>(&self, pairs: &[(S, S)]) -> Vec<Alignment>
    where
        S: AsRef<[T]> + Sync,
        T: PartialEq,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("align_batch", pairs = pairs.len(), parallel = true);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .par_iter()
            .map(|(a, b)| self.align(a.as_ref(), b.as_ref()))
            .collect()
    }

    /// Align every `(a, b)` pair in `pairs`.
    #[cfg(not(feature = "parallel"))]
    pub fn align_batch<S, T>(&self, pairs: &[(S, S)]) -> Vec<Alignment>
    where
        S: AsRef<[T]>,
        T: PartialEq,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("align_batch", pairs = pairs.len(), parallel = false);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .iter()
            .map(|(a, b)| self.align(a.as_ref(), b.as_ref()))
            .collect()
    }
}

/// Align every pair with the reference precedence.
///
/// ```
/// use seq_edit::align_batch;
///
/// let pairs = [("ACGT", "ACGT"), ("A", "G"), ("", "AC")];
/// let out = align_batch::<_, u8>(&pairs.map(|(a, b)| (a.as_bytes(), b.as_bytes())));
/// let dists: Vec<usize> = out.iter().map(|aln| aln.distance).collect();
/// assert_eq!(dists, vec![0, 1, 2]);
/// ```
#[cfg(feature = "parallel")]
pub fn align_batch<S, T>(pairs: &[(S, S)]) -> Vec<Alignment>
where
    S: AsRef<[T]> + Sync,
    T: PartialEq,
{
    Aligner::new().align_batch(pairs)
}

/// Align every pair with the reference precedence.
///
/// ```
/// use seq_edit::align_batch;
///
/// let pairs = [("ACGT", "ACGT"), ("A", "G"), ("", "AC")];
/// let out = align_batch::<_, u8>(&pairs.map(|(a, b)| (a.as_bytes(), b.as_bytes())));
/// let dists: Vec<usize> = out.iter().map(|aln| aln.distance).collect();
/// assert_eq!(dists, vec![0, 1, 2]);
/// ```
#[cfg(not(feature = "parallel"))]
pub fn align_batch<S, T>(pairs: &[(S, S)]) -> Vec<Alignment>
where
    S: AsRef<[T]>,
    T: PartialEq,
{
    Aligner::new().align_batch(pairs)
}
