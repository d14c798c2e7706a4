//! Full edit-distance table.
//!
//! The table has `n + 1` rows and `m + 1` columns, stored row-major in a
//! single buffer. Cell `(i, j)` holds the minimum number of unit-cost edits
//! turning `a[..i]` into `b[..j]`.

/// Filled `(n + 1) x (m + 1)` distance table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DistanceTable {
    /// Build and fill the table for `a` (rows) against `b` (columns).
    ///
    /// Row 0 and column 0 hold the base cases (`j` inserts, `i` deletes).
    /// Interior cells are filled row-major: a matching pair copies the
    /// diagonal, anything else is one more than the cheapest of the
    /// diagonal, left and up neighbours.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            let ch = &a[i - 1];
            let (prev, curr) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            for j in 1..cols {
                curr[j] = if *ch == b[j - 1] {
                    prev[j - 1]
                } else {
                    1 + prev[j - 1].min(curr[j - 1]).min(prev[j])
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows (`a.len() + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`b.len() + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.cols + col]
    }

    /// Value of the final cell: the edit distance of the full sequences.
    #[inline]
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Row `i` as a slice of length `cols()`.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceTable;

    #[test]
    fn base_cases() {
        let t = DistanceTable::build(b"ACG", b"TT");
        assert_eq!(t.rows(), 4);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.row(0), &[0, 1, 2]);
        for i in 0..t.rows() {
            assert_eq!(t.get(i, 0), i);
        }
    }

    #[test]
    fn both_empty_is_single_zero_cell() {
        let t = DistanceTable::build::<u8>(&[], &[]);
        assert_eq!((t.rows(), t.cols()), (1, 1));
        assert_eq!(t.distance(), 0);
    }

    #[test]
    fn kitten_sitting() {
        let t = DistanceTable::build(b"kitten", b"sitting");
        assert_eq!(t.distance(), 3);
    }

    #[test]
    fn small_table_values() {
        // a = "AC", b = "A"
        let t = DistanceTable::build(b"AC", b"A");
        assert_eq!(t.row(0), &[0, 1]);
        assert_eq!(t.row(1), &[1, 0]);
        assert_eq!(t.row(2), &[2, 1]);
    }

    #[test]
    fn interior_cells_follow_recurrence() {
        let a = b"ACAACC";
        let b = b"CAAAAC";
        let t = DistanceTable::build(a, b);
        for i in 1..t.rows() {
            for j in 1..t.cols() {
                let expected = if a[i - 1] == b[j - 1] {
                    t.get(i - 1, j - 1)
                } else {
                    1 + t
                        .get(i - 1, j - 1)
                        .min(t.get(i, j - 1))
                        .min(t.get(i - 1, j))
                };
                assert_eq!(t.get(i, j), expected, "cell ({i},{j})");
            }
        }
        assert_eq!(t.distance(), 3);
    }
}
