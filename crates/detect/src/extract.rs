use std::collections::HashSet;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Level};

use crate::candidate::{format_statistics, ComponentCandidate, FormatStatistics};
use crate::config::DetectConfig;
use crate::error::DetectError;
use crate::format::classify;

/// Comprehensive scan pattern: a superset of the eight family patterns.
///
/// Every match is re-classified against the anchored family patterns, so
/// this one only has to find candidate tokens, not judge them.
static COMPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Z]{2,3}\d{3,4}(?:[A-Z]/\d{1,3})?\b")
        .expect("component scan pattern compiles")
});

/// Known false-positive shapes: standards references, document-management
/// tokens, and revision markers that fit the component pattern but never
/// name equipment.
static DENYLIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:ISO|EN|NS|PDF|REV|VER|DWG)\d+$").expect("denylist pattern compiles")
});

/// True when a normalized code matches a known false-positive shape.
pub fn is_denylisted(normalized_code: &str) -> bool {
    DENYLIST_RE.is_match(normalized_code)
}

/// Result of a format-learning extraction pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extraction {
    /// Surviving candidates, deduplicated, in order of first appearance.
    pub candidates: Vec<ComponentCandidate>,
    /// Statistics over the pre-filter candidate set; what the learning
    /// decision was based on.
    pub stats: FormatStatistics,
    /// Whether the dominant-convention filter was applied.
    pub format_filtered: bool,
}

/// Scans free text for component-code-shaped tokens.
///
/// Deduplicated by normalized code (first occurrence wins), in order of
/// first appearance. Tokens matching the false-positive denylist are
/// dropped as a final filter. Pure; each call builds its own match
/// iterator, so there is no shared matcher state to reset.
pub fn extract_candidates(text: &str) -> Vec<ComponentCandidate> {
    let mut candidates = scan(text);
    candidates.retain(|c| !is_denylisted(&c.normalized_code));
    candidates
}

/// Extraction with per-document format learning.
///
/// Documents are internally consistent in their numbering convention: a
/// drawing using 3-letter/4-digit codes rarely mixes in 2-letter/3-digit
/// ones. When strictly more than `cfg.min_sample_size` candidates exist and
/// the single most frequent format accounts for strictly more than
/// `cfg.dominant_share` of them, extraction is restricted to that format's
/// base/extended pair, suppressing look-alike tokens that fit the generic
/// pattern but not the document's convention. Below either threshold all
/// candidates are returned unfiltered.
///
/// `doc_id` is only used for log correlation.
pub fn smart_extract(
    doc_id: &str,
    text: &str,
    cfg: &DetectConfig,
) -> Result<Extraction, DetectError> {
    cfg.validate()?;

    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "detect.smart_extract", doc_id = %doc_id);
    let _guard = span.enter();

    let mut candidates = if cfg.apply_denylist {
        extract_candidates(text)
    } else {
        scan(text)
    };
    let stats = format_statistics(&candidates);

    let dominant_applies = stats.total_candidates > cfg.min_sample_size
        && (stats.dominant_count() as f32) > cfg.dominant_share * stats.total_candidates as f32;

    let mut format_filtered = false;
    if dominant_applies {
        if let Some(dominant) = stats.dominant_format {
            candidates.retain(|c| c.format.same_family(dominant));
            format_filtered = true;
            debug!(
                dominant = dominant.wire_name(),
                total = stats.total_candidates,
                "dominant_convention_applied"
            );
        }
    } else {
        debug!(
            total = stats.total_candidates,
            "dominant_convention_skipped"
        );
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        candidates = candidates.len(),
        format_filtered, elapsed_micros, "smart_extract_complete"
    );

    Ok(Extraction {
        candidates,
        stats,
        format_filtered,
    })
}

/// Raw scan without the denylist: find, classify, dedup.
fn scan(text: &str) -> Vec<ComponentCandidate> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for m in COMPONENT_RE.find_iter(text) {
        let raw = m.as_str();
        let normalized = raw.trim().to_uppercase();
        if !seen.insert(normalized.clone()) {
            continue;
        }
        // The scan pattern is a superset of the family patterns, so every
        // match classifies; the guard keeps the invariant local.
        let Some(format) = classify(&normalized) else {
            continue;
        };
        out.push(ComponentCandidate {
            raw_code: raw.to_string(),
            normalized_code: normalized,
            format,
            confidence: format.confidence(),
        });
    }
    out
}
