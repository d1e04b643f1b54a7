//! TFM identifier grammar layer.
//!
//! A TFM code names one physical piece of equipment:
//! `+{building}={system}-{component}%{typeCode}`, e.g.
//! `+256=360.0001-RTA4001%RTA0001`. Real documents render the same code a
//! dozen ways (separators dropped, fields omitted, mixed case), so this
//! crate owns the one grammar everything else is defined against.
//!
//! ## What we do
//!
//! - Parse a raw string into a typed [`Identifier`] ([`parse`])
//! - Canonicalize the individual fields ([`normalize_system`],
//!   [`normalize_component`], [`normalize_type_code`])
//! - Render an identifier back to its canonical TFM form ([`build_tfm`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared mutable state. Same input, same output,
//! on any machine, from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - A successful parse always has both `system` and `component`. There is
//!   no partially-filled identifier: a string where either cannot be
//!   isolated parses to `None`, and callers decide whether to fall back to
//!   treating the input as a bare component code.
//! - The normalizers are total and idempotent; they degrade to an empty
//!   string on garbage input instead of failing.
//! - Digit counts are significant: `RTA4001` and `RTA04001` stay distinct.
//!   Fuzzy tolerance belongs to the variant/matching layer, not here.

mod identifier;
mod normalize;
mod parser;

pub use crate::identifier::Identifier;
pub use crate::normalize::{normalize_component, normalize_system, normalize_type_code};
pub use crate::parser::{build_tfm, parse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fully_qualified_tfm() {
        let id = parse("+256=360.0001-RTA4001%RTA0001").expect("full TFM parses");
        assert_eq!(id.building.as_deref(), Some("256"));
        assert_eq!(id.system, "360.0001");
        assert_eq!(id.component, "RTA4001");
        assert_eq!(id.type_code.as_deref(), Some("RTA0001"));
    }

    #[test]
    fn parse_is_case_insensitive_and_uppercases() {
        let id = parse("=360.0001-rta4001%rta0001").expect("lowercase input parses");
        assert_eq!(id.system, "360.0001");
        assert_eq!(id.component, "RTA4001");
        assert_eq!(id.type_code.as_deref(), Some("RTA0001"));
    }

    #[test]
    fn parse_without_separators() {
        // Drawings often strip every separator.
        let id = parse("360RTA4001").expect("concatenated form parses");
        assert_eq!(id.system, "360");
        assert_eq!(id.component, "RTA4001");
        assert!(id.building.is_none());
        assert!(id.type_code.is_none());
    }

    #[test]
    fn parse_preserves_revision_on_raw_system() {
        let id = parse("360.0001:02-RT001T/01").expect("revisioned system parses");
        assert_eq!(id.system, "360.0001:02");
        assert_eq!(id.component, "RT001T/01");

        let normalized = id.normalized();
        assert_eq!(normalized.system, "360.0001");
        assert_eq!(normalized.component, "RT001T/01");
    }

    #[test]
    fn parse_rejects_partial_identifiers() {
        // Bare component: no system group can be isolated.
        assert_eq!(parse("RTA4001"), None);
        // Bare system: no component group can be isolated.
        assert_eq!(parse("360.0001"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("not a code at all"), None);
    }

    #[test]
    fn normalizers_match_documented_examples() {
        assert_eq!(normalize_system("=360.001:02"), "360.001");
        assert_eq!(normalize_component("-rta4001"), "RTA4001");
        assert_eq!(normalize_type_code("%rta0001"), "RTA0001");
    }

    #[test]
    fn normalizers_are_total_on_garbage() {
        assert_eq!(normalize_system(""), "");
        assert_eq!(normalize_component("   "), "");
        assert_eq!(normalize_type_code("%%%"), "");
    }

    #[test]
    fn normalizers_are_idempotent() {
        let samples = [
            "",
            "   ",
            "=360.001:02",
            "==360",
            "360.0001",
            "-rta4001",
            "--RT001T/01",
            "%rta0001",
            "garbage =:- input",
        ];
        for s in samples {
            let sys = normalize_system(s);
            assert_eq!(normalize_system(&sys), sys, "system idempotence for {s:?}");
            let comp = normalize_component(s);
            assert_eq!(
                normalize_component(&comp),
                comp,
                "component idempotence for {s:?}"
            );
            let tc = normalize_type_code(s);
            assert_eq!(
                normalize_type_code(&tc),
                tc,
                "type code idempotence for {s:?}"
            );
        }
    }

    #[test]
    fn no_digit_padding_is_performed() {
        assert_ne!(normalize_component("RTA4001"), normalize_component("RTA04001"));
    }

    #[test]
    fn build_tfm_round_trips_through_parse() {
        let cases = [
            Identifier {
                building: Some("256".into()),
                system: "360.0001".into(),
                component: "RTA4001".into(),
                type_code: Some("RTA0001".into()),
            },
            Identifier {
                building: None,
                system: "360.0001".into(),
                component: "RT001T/01".into(),
                type_code: None,
            },
            Identifier {
                building: None,
                system: "433".into(),
                component: "JP005".into(),
                type_code: Some("JP0001".into()),
            },
        ];

        for original in cases {
            let rendered = build_tfm(&original);
            let parsed = parse(&rendered)
                .unwrap_or_else(|| panic!("rendered TFM {rendered:?} must parse"));
            assert_eq!(
                normalize_system(&parsed.system),
                normalize_system(&original.system)
            );
            assert_eq!(
                normalize_component(&parsed.component),
                normalize_component(&original.component)
            );
        }
    }

    #[test]
    fn build_tfm_renders_expected_forms() {
        let full = Identifier {
            building: Some("256".into()),
            system: "360.0001".into(),
            component: "RTA4001".into(),
            type_code: Some("RTA0001".into()),
        };
        assert_eq!(build_tfm(&full), "+256=360.0001-RTA4001%RTA0001");

        let bare = Identifier {
            building: None,
            system: "360.0001".into(),
            component: "RTA4001".into(),
            type_code: None,
        };
        assert_eq!(build_tfm(&bare), "360.0001-RTA4001");
    }
}
