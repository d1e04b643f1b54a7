//! Configuration for the component format detector.
//!
//! The format-learning thresholds live here as named, documented values.
//! They are policy heuristics carried over from production tuning, not
//! structural invariants. Revisit them freely; bump `version` when you do.

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// Minimum candidate count (exclusive) before a document is considered to
/// have enough evidence to infer its numbering convention.
pub const DEFAULT_MIN_SAMPLE_SIZE: u32 = 3;

/// Share of all candidates (exclusive) the single most frequent format must
/// reach before the dominant-convention filter kicks in.
pub const DEFAULT_DOMINANT_SHARE: f32 = 0.5;

/// Runtime configuration for [`smart_extract`](crate::smart_extract).
///
/// Cheap to clone, serde-friendly, validated once at startup via
/// [`DetectConfig::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectConfig {
    /// Configuration version. Version 0 is reserved and rejected; bump on
    /// any behavior-affecting change so extractions stay comparable.
    pub version: u32,
    /// Format learning requires strictly more than this many candidates.
    /// Below it, all candidates are returned unfiltered: too little
    /// evidence to infer a convention.
    pub min_sample_size: u32,
    /// Format learning requires the dominant format to account for strictly
    /// more than this share of all candidates.
    pub dominant_share: f32,
    /// Whether the fixed false-positive denylist is applied as the final
    /// filter. On by default; turn off only for corpora where the
    /// denylisted shapes are genuine equipment codes.
    pub apply_denylist: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            dominant_share: DEFAULT_DOMINANT_SHARE,
            apply_denylist: true,
        }
    }
}

impl DetectConfig {
    /// Validate the configuration. Call once at startup; a failure here is
    /// a programming error in the deployment, not a runtime condition.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.version == 0 {
            return Err(DetectError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !(self.dominant_share > 0.0 && self.dominant_share < 1.0) {
            return Err(DetectError::InvalidConfig(
                "dominant_share must be strictly between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}
