//! Discipline prediction for TFM systems.
//!
//! When a new system is registered, the responsible-discipline cells
//! (Elektro, Rør, Ventilasjon, ...) start empty. Sibling systems under the
//! same category prefix were usually filled in the same way, so a simple
//! majority vote over their historical values makes a useful proposal.
//!
//! This is statistics over already-normalized system codes only; it shares
//! no machinery with the parsing/matching layers.
//!
//! ## Known approximation
//!
//! The majority denominator is the number of sibling rows under the
//! prefix, not the number of rows that recorded anything for the specific
//! discipline. A discipline recorded by only a few siblings can therefore
//! never reach the threshold, however unanimous those few are. That is the
//! historical behavior, kept deliberately; the tests pin both it and the
//! scenario where a per-discipline denominator would differ, so changing
//! it later is a visible decision.

mod config;
mod error;
mod predict;

pub use crate::config::{PredictConfig, DEFAULT_MAJORITY_SHARE, MIN_PREFIX_LEN};
pub use crate::error::DisciplineError;
pub use crate::predict::{predict, system_prefix, SiblingSystem};
