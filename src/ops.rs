//! Edit operations and operation scripts.
//!
//! Each [`Operation`] has a stable one-character code (`M`, `C`, `I`, `D`)
//! which is the text form passed between the aligner and the renderer.
//! An [`EditScript`] is an ordered list of operations read left to right.

use std::fmt;
use std::str::FromStr;

use crate::error::{AlignError, Result};

/// A single edit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `M`: symbols are equal; consumes one symbol from each sequence.
    Match,
    /// `C`: symbols differ; consumes one symbol from each sequence.
    Convert,
    /// `I`: consumes one symbol from the second sequence only.
    Insert,
    /// `D`: consumes one symbol from the first sequence only.
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Match,
        Operation::Convert,
        Operation::Insert,
        Operation::Delete,
    ];

    /// Single-character code.
    pub fn code(self) -> char {
        match self {
            Operation::Match => 'M',
            Operation::Convert => 'C',
            Operation::Insert => 'I',
            Operation::Delete => 'D',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Operation::Match),
            'C' => Some(Operation::Convert),
            'I' => Some(Operation::Insert),
            'D' => Some(Operation::Delete),
            _ => None,
        }
    }

    /// Character drawn between the two gapped lines of a rendered alignment.
    pub fn glyph(self) -> char {
        match self {
            Operation::Match => '|',
            Operation::Convert => '*',
            Operation::Insert | Operation::Delete => ' ',
        }
    }

    /// Unit cost: zero for a match, one otherwise.
    #[inline]
    pub fn cost(self) -> usize {
        match self {
            Operation::Match => 0,
            _ => 1,
        }
    }

    /// Whether this operation consumes a symbol of the first sequence.
    #[inline]
    pub fn consumes_first(self) -> bool {
        !matches!(self, Operation::Insert)
    }

    /// Whether this operation consumes a symbol of the second sequence.
    #[inline]
    pub fn consumes_second(self) -> bool {
        !matches!(self, Operation::Delete)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ordered sequence of edit operations.
///
/// ```
/// use seq_edit::{EditScript, Operation};
///
/// let script: EditScript = "DMMMICM".parse().unwrap();
/// assert_eq!(script.len(), 7);
/// assert_eq!(script.cost(), 3);
/// assert_eq!(script.consumed(), (6, 6));
/// assert_eq!(script.to_string(), "DMMMICM");
/// assert_eq!(script[0], Operation::Delete);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EditScript {
    ops: Vec<Operation>,
}

impl EditScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn into_vec(self) -> Vec<Operation> {
        self.ops
    }

    /// Total unit cost of the script.
    pub fn cost(&self) -> usize {
        self.ops.iter().map(|op| op.cost()).sum()
    }

    /// Number of occurrences of `op`.
    pub fn count(&self, op: Operation) -> usize {
        self.ops.iter().filter(|&&o| o == op).count()
    }

    /// Symbols consumed from `(first, second)` sequence when the script is
    /// replayed from the front.
    pub fn consumed(&self) -> (usize, usize) {
        self.ops.iter().fold((0, 0), |(a, b), op| {
            (
                a + usize::from(op.consumes_first()),
                b + usize::from(op.consumes_second()),
            )
        })
    }

    pub(crate) fn reverse(&mut self) {
        self.ops.reverse();
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op.code())?;
        }
        Ok(())
    }
}

impl FromStr for EditScript {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Operation::from_code(symbol)
                    .ok_or(AlignError::UnknownOperation { symbol, position })
            })
            .collect()
    }
}

impl std::ops::Index<usize> for EditScript {
    type Output = Operation;

    fn index(&self, index: usize) -> &Operation {
        &self.ops[index]
    }
}

impl AsRef<[Operation]> for EditScript {
    fn as_ref(&self) -> &[Operation] {
        &self.ops
    }
}

impl From<Vec<Operation>> for EditScript {
    fn from(ops: Vec<Operation>) -> Self {
        Self { ops }
    }
}

impl FromIterator<Operation> for EditScript {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EditScript {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
