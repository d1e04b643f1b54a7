use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::format::FormatTag;

/// A token found in free text believed to be a component code.
///
/// Candidates are transient: they exist for the duration of one extraction
/// call, and the calling layer decides what, if anything, to persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentCandidate {
    /// The token exactly as it appeared in the text.
    pub raw_code: String,
    /// Upper-cased, trimmed form used for deduplication and index keys.
    pub normalized_code: String,
    /// The format family the token classified into.
    pub format: FormatTag,
    /// Detection confidence; extended families score higher than base ones.
    pub confidence: f32,
}

/// Aggregate format statistics over one document's extracted candidates.
///
/// Computed once per document to decide whether the dominant-convention
/// filter should be applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatStatistics {
    /// Candidate count per format family.
    pub counts_by_format: HashMap<FormatTag, u32>,
    /// The single most frequent family, if any candidates exist. Ties
    /// resolve to the first tag in [`FormatTag::ALL`] order.
    pub dominant_format: Option<FormatTag>,
    /// Total number of candidates counted.
    pub total_candidates: u32,
}

impl FormatStatistics {
    /// Count of the dominant format, or 0 when there are no candidates.
    pub fn dominant_count(&self) -> u32 {
        self.dominant_format
            .and_then(|tag| self.counts_by_format.get(&tag))
            .copied()
            .unwrap_or(0)
    }
}

/// Computes [`FormatStatistics`] over a candidate list.
pub fn format_statistics(candidates: &[ComponentCandidate]) -> FormatStatistics {
    let mut counts_by_format: HashMap<FormatTag, u32> = HashMap::new();
    for candidate in candidates {
        *counts_by_format.entry(candidate.format).or_insert(0) += 1;
    }

    // Scan tags in declaration order so ties break deterministically.
    let mut dominant_format = None;
    let mut dominant_count = 0;
    for tag in FormatTag::ALL {
        let count = counts_by_format.get(&tag).copied().unwrap_or(0);
        if count > dominant_count {
            dominant_format = Some(tag);
            dominant_count = count;
        }
    }

    FormatStatistics {
        counts_by_format,
        dominant_format,
        total_candidates: candidates.len() as u32,
    }
}
