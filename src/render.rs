//! Three-line alignment view.
//!
//! ```text
//! ACAA-CC
//!  ||| *|
//! -CAAAAC
//! ```
//!
//! The top line is the first sequence with `-` where a symbol was inserted,
//! the bottom line is the second sequence with `-` where a symbol was
//! deleted, and the middle line marks matches with `|` and conversions
//! with `*`.

use std::fmt;
use std::io;

use crate::error::{AlignError, Malformation, Result, Side};
use crate::ops::Operation;

/// Gap filler used on the top and bottom lines.
pub const GAP: char = '-';

/// Rendered alignment. All three lines have one column per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentView {
    pub top: String,
    pub glyphs: String,
    pub bottom: String,
}

impl AlignmentView {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.glyphs.chars().count()
    }

    /// Write the three lines, each terminated by a newline.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.top)?;
        writeln!(out, "{}", self.glyphs)?;
        writeln!(out, "{}", self.bottom)
    }
}

impl fmt::Display for AlignmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.top, self.glyphs, self.bottom)
    }
}

/// Render `ops` against `a` and `b`.
///
/// Fails with [`AlignError::MalformedOperations`] if an operation reads past
/// the end of either sequence, or if symbols remain after the last
/// operation. Nothing is returned on failure.
///
/// ```
/// use seq_edit::{render, EditScript};
///
/// let ops: EditScript = "DMMMICM".parse().unwrap();
/// let view = render(b"ACAACC", b"CAAAAC", &ops).unwrap();
/// assert_eq!(view.top, "ACAA-CC");
/// assert_eq!(view.glyphs, " ||| *|");
/// assert_eq!(view.bottom, "-CAAAAC");
/// ```
pub fn render<T, O>(a: &[T], b: &[T], ops: O) -> Result<AlignmentView>
where
    T: Copy + Into<char>,
    O: AsRef<[Operation]>,
{
    let ops = ops.as_ref();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("render", n = a.len(), m = b.len(), ops = ops.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut top = String::with_capacity(ops.len());
    let mut glyphs = String::with_capacity(ops.len());
    let mut bottom = String::with_capacity(ops.len());
    let mut i = 0usize;
    let mut j = 0usize;

    for (position, &op) in ops.iter().enumerate() {
        if op.consumes_first() {
            let &sym = a.get(i).ok_or(AlignError::MalformedOperations {
                side: Side::Top,
                position,
                len: a.len(),
                reason: Malformation::Overrun,
            })?;
            top.push(sym.into());
            i += 1;
        } else {
            top.push(GAP);
        }

        if op.consumes_second() {
            let &sym = b.get(j).ok_or(AlignError::MalformedOperations {
                side: Side::Bottom,
                position,
                len: b.len(),
                reason: Malformation::Overrun,
            })?;
            bottom.push(sym.into());
            j += 1;
        } else {
            bottom.push(GAP);
        }

        glyphs.push(op.glyph());
    }

    for (side, used, len) in [(Side::Top, i, a.len()), (Side::Bottom, j, b.len())] {
        if used < len {
            return Err(AlignError::MalformedOperations {
                side,
                position: ops.len(),
                len,
                reason: Malformation::Unconsumed,
            });
        }
    }

    Ok(AlignmentView {
        top,
        glyphs,
        bottom,
    })
}
