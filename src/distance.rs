//! Distance-only computation in linear space.
//!
//! When no script is needed the table can be collapsed to two rolling rows.
//! The result always equals [`DistanceTable::distance`](crate::table::DistanceTable::distance)
//! for the same inputs.

/// Edit distance of `a` and `b` using O(min(|a|, |b|)) working memory.
///
/// ```
/// use seq_edit::distance;
///
/// assert_eq!(distance(b"kitten", b"sitting"), 3);
/// assert_eq!(distance(b"", b"ACGT"), 4);
/// ```
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Distance is symmetric; keep the shorter sequence on the columns.
    let (rows, cols) = if b.len() <= a.len() { (a, b) } else { (b, a) };
    last_row(rows, cols)[cols.len()]
}

/// Final row of the distance table of `x` (rows) against `y` (columns).
pub(crate) fn last_row<T: PartialEq>(x: &[T], y: &[T]) -> Vec<usize> {
    let m = y.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for (i, cx) in x.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=m {
            curr[j] = if *cx == y[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(curr[j - 1]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DistanceTable;

    #[test]
    fn last_row_small_cases() {
        assert_eq!(last_row::<u8>(b"", b""), vec![0]);
        assert_eq!(last_row(b"A", b""), vec![1]);
        assert_eq!(last_row(b"", b"AC"), vec![0, 1, 2]);
        assert_eq!(last_row(b"AC", b"A"), vec![2, 1]);
    }

    #[test]
    fn matches_full_table_last_row() {
        let a = b"GATTACA";
        let b = b"GCATGCU";
        let table = DistanceTable::build(a, b);
        assert_eq!(last_row(a, b), table.row(a.len()));
    }

    #[test]
    fn orientation_does_not_matter() {
        assert_eq!(distance(b"ACAACC", b"CA"), distance(b"CA", b"ACAACC"));
        assert_eq!(distance(b"ACAACC", b"CAAAAC"), 3);
    }
}
