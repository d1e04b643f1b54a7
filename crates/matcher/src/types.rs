use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One row of the authoritative equipment register ("mass list").
///
/// Owned by the surrounding application; the matcher only reads it. All
/// fields are plain strings as they came out of the register. The engine
/// normalizes on its side and never mutates the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MassListEntry {
    /// The full TFM string as recorded, when the register has one.
    pub tfm: Option<String>,
    pub building: Option<String>,
    pub system: Option<String>,
    pub component: Option<String>,
    pub type_code: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Opaque application attributes carried through to the match result.
    #[serde(default)]
    pub attributes: Option<JsonValue>,
}

/// A component token detected at a position inside a specific document.
///
/// The "evidence" side of a match: a code seen at a location, without
/// building or type-code context of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentComponent {
    /// The detected code, raw or normalized; the index normalizes its keys.
    pub code: String,
    /// System code when the detection layer could attribute one.
    pub system: Option<String>,
    pub page: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Opaque application attributes carried through to the match result.
    #[serde(default)]
    pub attributes: Option<JsonValue>,
}

/// Outcome of matching one mass-list entry against a document index.
///
/// No match is an explicit variant, not an empty value: callers must handle
/// equipment that exists in the register but was found on no drawing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Matched {
        entry: MassListEntry,
        component: DocumentComponent,
        /// The textual variant that hit the index, for diagnostics.
        variant: String,
    },
    Unmatched {
        entry: MassListEntry,
    },
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// The mass-list entry this result is about, matched or not.
    pub fn entry(&self) -> &MassListEntry {
        match self {
            MatchResult::Matched { entry, .. } => entry,
            MatchResult::Unmatched { entry } => entry,
        }
    }
}
