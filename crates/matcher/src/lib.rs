//! TFM cross-source matching layer.
//!
//! Equipment lives in three places that never agree on spelling: the master
//! register ("mass list"), components detected inside drawings, and
//! inspection-protocol rows. This crate decides whether a register row and
//! a detected component name the same physical thing.
//!
//! ## How matching works
//!
//! 1. [`generate_variants`] expands a register row into every textual form
//!    it could legitimately appear as (separators dropped, prefixes added).
//! 2. [`DocumentIndex::build`] indexes one document's detected components
//!    under normalized keys, once, at O(N).
//! 3. [`match_entry`] probes the variants in order; the first hit wins, and
//!    no hit is an explicit [`MatchResult::Unmatched`], never a null.
//!
//! The index is immutable after construction and safe to share across
//! threads within a request; rebuild it when the document set changes.

mod engine;
mod index;
mod types;
mod variants;

pub use crate::engine::{match_entry, match_mass_list};
pub use crate::index::DocumentIndex;
pub use crate::types::{DocumentComponent, MassListEntry, MatchResult};
pub use crate::variants::generate_variants;
