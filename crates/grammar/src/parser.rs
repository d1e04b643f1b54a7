use once_cell::sync::Lazy;
use regex::Regex;

use crate::identifier::Identifier;

/// The TFM grammar as one comprehensive pattern with named groups.
///
/// Field order is fixed; the separators between them are optional because
/// source documents drop them inconsistently. System and component are the
/// only required groups.
static TFM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        ^\s*
        (?: \+ (?P<building> [A-Z0-9]+ ) )?           # optional building qualifier
        \s* =? \s*
        (?P<system> \d{3,4} (?: \. \d{3,4} )? (?: : \d{2,4} )? )
        \s* -? \s*
        (?P<component> [A-Z]{2,3} \d+ [A-Z0-9/_-]* )
        \s*
        (?: % (?P<type_code> [A-Z0-9./_-]+ ) )?
        \s*$
        ",
    )
    .expect("TFM grammar pattern compiles")
});

/// Parses a raw TFM string into its typed decomposition.
///
/// Matching is case-insensitive; system, component, and type code come back
/// upper-cased, while the building qualifier keeps its raw casing. Returns
/// `None` whenever the system or component group cannot be isolated; a
/// partial match is never surfaced as a partially-filled [`Identifier`].
pub fn parse(raw: &str) -> Option<Identifier> {
    let caps = TFM_RE.captures(raw)?;
    Some(Identifier {
        building: caps.name("building").map(|m| m.as_str().to_string()),
        system: caps["system"].to_uppercase(),
        component: caps["component"].to_uppercase(),
        type_code: caps.name("type_code").map(|m| m.as_str().to_uppercase()),
    })
}

/// Renders an identifier in its canonical TFM form.
///
/// `+{building}={system}-{component}%{typeCode}` with the optional parts
/// elided when absent: an identifier without a building renders without the
/// leading `+..=` pair. The inverse of [`parse`] up to normalization.
pub fn build_tfm(id: &Identifier) -> String {
    let mut out = String::new();
    if let Some(building) = id
        .building
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
    {
        out.push('+');
        out.push_str(building);
        out.push('=');
    }
    out.push_str(&id.system);
    out.push('-');
    out.push_str(&id.component);
    if let Some(type_code) = id
        .type_code
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        out.push('%');
        out.push_str(type_code);
    }
    out
}
