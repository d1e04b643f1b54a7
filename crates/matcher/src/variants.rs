//! Candidate-variant generation for a (possibly partial) identifier.
//!
//! Consuming systems strip separators inconsistently: the same equipment
//! appears as `360.0001-RTA4001`, `=360.0001-RTA4001`, `360.0001RTA4001`,
//! or the full `+256=360.0001-RTA4001%RTA0001`. Rather than N pairwise
//! comparison rules, the candidate set itself is normalized once and
//! matching reduces to set intersection against the document index.

use std::collections::HashSet;

use grammar::{normalize_component, normalize_system, normalize_type_code};

use crate::types::MassListEntry;

/// Produces the ordered set of textual forms an entry could legitimately
/// appear as.
///
/// Deduplicated, insertion-ordered. Fully-qualified forms come before the
/// bare `{system}{component}` concatenation, which encodes the matcher's
/// tie-break preference. Fields are normalized (revision stripped, leading
/// separators dropped, upper-cased) before rendering so the variants live
/// in the same key space as the document index.
///
/// An entry without a system falls back to its bare normalized component,
/// the same way callers treat unparseable strings as bare codes.
pub fn generate_variants(entry: &MassListEntry) -> Vec<String> {
    let mut variants = Vec::new();
    let mut seen = HashSet::new();

    if let Some(tfm) = non_empty(entry.tfm.as_deref().map(|t| t.trim().to_uppercase())) {
        push(&mut variants, &mut seen, tfm);
    }

    let system = non_empty(entry.system.as_deref().map(normalize_system));
    let component = non_empty(entry.component.as_deref().map(normalize_component));
    let type_code = non_empty(entry.type_code.as_deref().map(normalize_type_code));
    let building = non_empty(entry.building.as_deref().map(|b| b.trim().to_uppercase()));

    match (system, component) {
        (Some(system), Some(component)) => {
            push(&mut variants, &mut seen, format!("{system}-{component}"));
            push(&mut variants, &mut seen, format!("={system}-{component}"));
            if let Some(type_code) = &type_code {
                push(
                    &mut variants,
                    &mut seen,
                    format!("{system}-{component}%{type_code}"),
                );
                push(
                    &mut variants,
                    &mut seen,
                    format!("={system}-{component}%{type_code}"),
                );
            }
            if let Some(building) = &building {
                push(
                    &mut variants,
                    &mut seen,
                    format!("+{building}={system}-{component}"),
                );
                if let Some(type_code) = &type_code {
                    push(
                        &mut variants,
                        &mut seen,
                        format!("+{building}={system}-{component}%{type_code}"),
                    );
                }
            }
            // Separator-free concatenation last: the least qualified form.
            push(&mut variants, &mut seen, format!("{system}{component}"));
        }
        (None, Some(component)) => push(&mut variants, &mut seen, component),
        _ => {}
    }

    variants
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn push(variants: &mut Vec<String>, seen: &mut HashSet<String>, variant: String) {
    if seen.insert(variant.clone()) {
        variants.push(variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        tfm: Option<&str>,
        building: Option<&str>,
        system: Option<&str>,
        component: Option<&str>,
        type_code: Option<&str>,
    ) -> MassListEntry {
        MassListEntry {
            tfm: tfm.map(Into::into),
            building: building.map(Into::into),
            system: system.map(Into::into),
            component: component.map(Into::into),
            type_code: type_code.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn includes_dashed_and_concatenated_forms() {
        let variants = generate_variants(&entry(None, None, Some("360.0001"), Some("RTA4001"), None));
        assert!(variants.contains(&"360.0001-RTA4001".to_string()));
        assert!(variants.contains(&"360.0001RTA4001".to_string()));
    }

    #[test]
    fn full_entry_produces_every_documented_form_in_order() {
        let variants = generate_variants(&entry(
            Some("+256=360.0001-RTA4001%RTA0001"),
            Some("256"),
            Some("360.0001"),
            Some("RTA4001"),
            Some("RTA0001"),
        ));
        assert_eq!(
            variants,
            vec![
                "+256=360.0001-RTA4001%RTA0001",
                "360.0001-RTA4001",
                "=360.0001-RTA4001",
                "360.0001-RTA4001%RTA0001",
                "=360.0001-RTA4001%RTA0001",
                "+256=360.0001-RTA4001",
                "360.0001RTA4001",
            ]
        );
    }

    #[test]
    fn fields_are_normalized_before_rendering() {
        let variants = generate_variants(&entry(
            None,
            None,
            Some("=360.001:02"),
            Some("-rta4001"),
            Some("%rta0001"),
        ));
        assert_eq!(variants[0], "360.001-RTA4001");
        assert!(variants.contains(&"360.001-RTA4001%RTA0001".to_string()));
        assert!(variants.contains(&"360.001RTA4001".to_string()));
    }

    #[test]
    fn bare_component_fallback_without_system() {
        let variants = generate_variants(&entry(None, None, None, Some("rta4001"), None));
        assert_eq!(variants, vec!["RTA4001"]);
    }

    #[test]
    fn empty_entry_yields_no_variants() {
        assert!(generate_variants(&MassListEntry::default()).is_empty());
    }

    #[test]
    fn duplicate_forms_collapse() {
        // The recorded TFM already equals the generated dashed form.
        let variants = generate_variants(&entry(
            Some("360.0001-RTA4001"),
            None,
            Some("360.0001"),
            Some("RTA4001"),
            None,
        ));
        assert_eq!(
            variants,
            vec!["360.0001-RTA4001", "=360.0001-RTA4001", "360.0001RTA4001"]
        );
    }
}
