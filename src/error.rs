//! Error type shared by the renderer, the operation codec and the aligner
//! configuration.
//!
//! The aligner itself is total and never returns an error.

use crate::ops::Operation;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlignError>;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first sequence (top line of a rendered alignment).
    Top,
    /// The second sequence (bottom line of a rendered alignment).
    Bottom,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Top => f.write_str("first"),
            Side::Bottom => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// An operation script does not consume the sequences exactly.
    ///
    /// `position` is the index of the offending operation, or the script
    /// length when symbols are left over after the last operation.
    #[error("malformed operations at position {position}: {reason} of the {side} sequence (length {len})")]
    MalformedOperations {
        side: Side,
        position: usize,
        len: usize,
        reason: Malformation,
    },

    /// A character outside `M`, `C`, `I`, `D` in an operation string.
    #[error("unknown operation '{symbol}' at position {position}")]
    UnknownOperation { symbol: char, position: usize },

    /// A tie-break precedence listed the same operation more than once.
    #[error("operation {0:?} appears more than once in tie-break precedence")]
    InvalidPrecedence(Operation),
}

/// How an operation script failed to match its sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// An operation asked for a symbol past the end.
    Overrun,
    /// The script ended before every symbol was consumed.
    Unconsumed,
}

impl std::fmt::Display for Malformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Malformation::Overrun => f.write_str("read past the end"),
            Malformation::Unconsumed => f.write_str("symbols left unconsumed"),
        }
    }
}
