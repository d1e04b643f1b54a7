//! TFM component format detector.
//!
//! Free text coming out of drawings, spreadsheets, and protocols is full of
//! short alphanumeric tokens. Some are equipment component codes, some are
//! standards references or document-management noise that happen to look
//! like one. This crate finds the candidates and decides which ones to
//! believe.
//!
//! ## What we do
//!
//! - Scan text for component-code-shaped tokens ([`extract_candidates`])
//! - Classify each into one of eight format families ([`FormatTag`])
//! - Learn the document's dominant numbering convention and suppress tokens
//!   that fall outside it ([`smart_extract`])
//! - Drop known false-positive shapes (`ISO9001`, `NS3420`, ...) as a final
//!   filter
//!
//! ## Pure function guarantee
//!
//! Extraction is pure and allocation-local: each call builds its own match
//! iterator, so there is no global matcher state and nothing to reset
//! between scans. Safe to call concurrently from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - Candidates are deduplicated by normalized code, first occurrence wins,
//!   output ordered by first appearance.
//! - Every token the scan pattern accepts classifies into exactly one
//!   format family; there is no "matched but unclassified" state.
//! - The learning thresholds in [`DetectConfig`] are tuning policy, not
//!   invariants. Documents below the sample floor come back unfiltered.

mod candidate;
mod config;
mod error;
mod extract;
mod format;

pub use crate::candidate::{format_statistics, ComponentCandidate, FormatStatistics};
pub use crate::config::{DetectConfig, DEFAULT_DOMINANT_SHARE, DEFAULT_MIN_SAMPLE_SIZE};
pub use crate::error::DetectError;
pub use crate::extract::{extract_candidates, is_denylisted, smart_extract, Extraction};
pub use crate::format::{classify, FormatTag, BASE_CONFIDENCE, EXTENDED_CONFIDENCE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_covers_mixed_real_world_text() {
        let text = "Aggregat RTA4001 (se også rt001t/01) iht. NS3420, rev DWG1001.";
        let candidates = extract_candidates(text);
        let codes: Vec<&str> = candidates
            .iter()
            .map(|c| c.normalized_code.as_str())
            .collect();
        assert_eq!(codes, vec!["RTA4001", "RT001T/01"]);
    }

    #[test]
    fn every_extracted_candidate_is_classified() {
        let text = "RT001 JP0051 RTA400 RTA4001 RT001T/01 JP0051A/1 RTA400B/12 RTA4001T/123";
        let candidates = extract_candidates(text);
        assert_eq!(candidates.len(), 8);
        for candidate in &candidates {
            assert_eq!(
                classify(&candidate.normalized_code),
                Some(candidate.format),
                "{} must classify to its own tag",
                candidate.normalized_code
            );
        }
    }

    #[test]
    fn statistics_describe_the_extraction() {
        let candidates = extract_candidates("RTA4001 RTA4002 RT001");
        let stats = format_statistics(&candidates);
        assert_eq!(stats.total_candidates, 3);
        assert_eq!(stats.dominant_format, Some(FormatTag::ThreeLetterFourDigit));
        assert_eq!(
            stats.counts_by_format.get(&FormatTag::TwoLetterThreeDigit),
            Some(&1)
        );
    }
}
