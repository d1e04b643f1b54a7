//! Field-level canonicalization for TFM code fragments.
//!
//! All three functions are total and idempotent: identifiers are normalized
//! repeatedly as they flow through extraction, indexing, and matching, so
//! `normalize(normalize(x)) == normalize(x)` must hold for arbitrary input.
//! Separator stripping therefore runs to a fixpoint instead of removing a
//! single occurrence.

/// Canonicalizes a system code fragment.
///
/// Strips leading `=` separators and trailing `:<digits>` revision suffixes,
/// trims whitespace, and upper-cases: `"=360.001:02"` becomes `"360.001"`.
pub fn normalize_system(s: &str) -> String {
    strip_revisions(strip_leading(s, '=')).to_uppercase()
}

/// Canonicalizes a component code fragment.
///
/// Strips leading `-` separators, trims whitespace, and upper-cases. No
/// digit padding is performed: `"RTA4001"` and `"RTA04001"` remain distinct
/// strings. Callers that need digit-padding tolerance go through the
/// variant generator instead.
pub fn normalize_component(s: &str) -> String {
    strip_leading(s, '-').to_uppercase()
}

/// Canonicalizes a type code fragment.
///
/// Strips leading `%` separators, trims whitespace, and upper-cases.
pub fn normalize_type_code(s: &str) -> String {
    strip_leading(s, '%').to_uppercase()
}

/// Trims whitespace and leading `sep` runs until neither changes the input.
fn strip_leading(s: &str, sep: char) -> &str {
    let mut s = s.trim();
    loop {
        let stripped = s.trim_start_matches(sep).trim();
        if stripped.len() == s.len() {
            return s;
        }
        s = stripped;
    }
}

/// Drops trailing `:<digits>` revision suffixes until none remain.
fn strip_revisions(s: &str) -> &str {
    let mut s = s;
    loop {
        let stripped = match s.rsplit_once(':') {
            Some((head, rev)) if !rev.is_empty() && rev.bytes().all(|b| b.is_ascii_digit()) => {
                head.trim_end()
            }
            _ => s,
        };
        if stripped.len() == s.len() {
            return s;
        }
        s = stripped;
    }
}
