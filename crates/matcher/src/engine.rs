use std::time::Instant;

use tracing::{info, Level};

use crate::index::DocumentIndex;
use crate::types::{MassListEntry, MatchResult};
use crate::variants::generate_variants;


/// Matches one mass-list entry against a document index.
///
/// Probes the entry's candidate variants in generation order and returns on
/// the first hit; fully-qualified forms are therefore preferred over the
/// bare concatenation. Because the index is keyed by normalized string
/// equality, at most one record can answer any given variant, and repeated
/// calls with the same inputs return the same result.
pub fn match_entry(entry: &MassListEntry, index: &DocumentIndex) -> MatchResult {
    for variant in generate_variants(entry) {
        if let Some(component) = index.get(&variant) {
            return MatchResult::Matched {
                entry: entry.clone(),
                component: component.clone(),
                variant,
            };
        }
    }
    MatchResult::Unmatched {
        entry: entry.clone(),
    }
}

/// Matches a batch of mass-list entries, preserving input order.
///
/// With the index built once at O(N), each entry costs O(variants) ≈ O(1),
/// so a full pass is O(N + M) instead of O(N·M). The verification rate for
/// a system is the caller's division over the returned batch.
pub fn match_mass_list(entries: &[MassListEntry], index: &DocumentIndex) -> Vec<MatchResult> {
    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "matcher.match_mass_list", entries = entries.len());
    let _guard = span.enter();

    let results: Vec<MatchResult> = entries
        .iter()
        .map(|entry| match_entry(entry, index))
        .collect();

    let matched = results.iter().filter(|r| r.is_matched()).count();
    let elapsed_micros = start.elapsed().as_micros();
    info!(
        entries = entries.len(),
        matched,
        unmatched = entries.len() - matched,
        indexed_keys = index.len(),
        elapsed_micros,
        "mass_list_match_complete"
    );

    results
}
