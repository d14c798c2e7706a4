//! Minimum edit-distance alignment with deterministic traceback.
//!
//! This crate aligns two symbol sequences (typically DNA over `ACGT`, but any
//! `PartialEq` symbols work) under uniform unit costs for insertion, deletion
//! and substitution, and returns one concrete optimal edit script.
//!
//! ## Core idea
//! 1. Fill the full `(n + 1) x (m + 1)` [`DistanceTable`].
//! 2. Walk it back from the final cell, breaking ties with a fixed
//!    [`Precedence`] (Delete, Insert, Match, Convert by default), so the
//!    same inputs always yield the same script.
//! 3. Optionally [`render`] the script as a three-line view.
//!
//! ## Quick start
//! ```
//! use seq_edit::{align, render};
//!
//! let aln = align(b"ACAACC", b"CAAAAC");
//! assert_eq!(aln.distance, 3);
//! assert_eq!(aln.operations.to_string(), "IMCMMMD");
//!
//! let view = render(b"ACAACC", b"CAAAAC", &aln.operations).unwrap();
//! assert_eq!(view.top, "-ACAACC");
//! assert_eq!(view.glyphs, " |*||| ");
//! assert_eq!(view.bottom, "CAAAAC-");
//! ```
//!
//! ## Operation codes
//! Scripts serialize to one character per step: `M` match, `C` convert
//! (substitution), `I` insert (consumes the second sequence), `D` delete
//! (consumes the first sequence).
//!
//! ## Features
//! - `tracing` (default): spans around alignment, traceback and rendering.
//! - `parallel`: [`align_batch`] spreads independent pairs over rayon.

pub mod aligner;
pub mod batch;
pub mod builder;
pub mod distance;
pub mod error;
pub mod ops;
pub mod render;
pub mod table;
pub mod traceback;

pub use crate::aligner::{align, Aligner, Alignment};
pub use crate::batch::align_batch;
pub use crate::builder::AlignerBuilder;
pub use crate::distance::distance;
pub use crate::error::{AlignError, Result};
pub use crate::ops::{EditScript, Operation};
pub use crate::render::{render, AlignmentView};
pub use crate::table::DistanceTable;
pub use crate::traceback::Precedence;
