use serde::{Deserialize, Serialize};

use crate::error::DisciplineError;

/// Share of sibling rows a value must reach to be predicted.
///
/// A simple majority threshold. Note the denominator: the count of all
/// sibling rows under the prefix, not the count of rows that recorded a
/// value for the discipline in question. Sparse disciplines therefore
/// understate confidence. Deliberate carry-over from the historical
/// behavior, documented rather than silently fixed.
pub const DEFAULT_MAJORITY_SHARE: f32 = 0.5;

/// Minimum length of the derived system prefix. Shorter prefixes group
/// unrelated systems together and are skipped entirely.
pub const MIN_PREFIX_LEN: usize = 2;

/// Runtime configuration for [`predict`](crate::predict).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictConfig {
    /// Configuration version. Version 0 is reserved and rejected.
    pub version: u32,
    /// Majority threshold; a value is predicted when its sibling count
    /// reaches `majority_share × siblings considered`.
    pub majority_share: f32,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            version: 1,
            majority_share: DEFAULT_MAJORITY_SHARE,
        }
    }
}

impl PredictConfig {
    /// Validate the configuration once at startup.
    pub fn validate(&self) -> Result<(), DisciplineError> {
        if self.version == 0 {
            return Err(DisciplineError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !(self.majority_share > 0.0 && self.majority_share <= 1.0) {
            return Err(DisciplineError::InvalidConfig(
                "majority_share must be in (0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}
