use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_component, normalize_system, normalize_type_code};

/// The canonical decomposition of a TFM code.
///
/// `system` and `component` are always present; a string where either cannot
/// be isolated does not produce an `Identifier` at all. Fields are stored
/// upper-cased as parsed, except `building`, which keeps its raw casing.
/// The system field may still carry a `:NN` revision suffix; call
/// [`Identifier::normalized`] to strip it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    /// Optional building/site qualifier, raw casing preserved.
    pub building: Option<String>,
    /// Dotted/numeric system code, e.g. `360.0001`, possibly revisioned.
    pub system: String,
    /// Component code, e.g. `RTA4001` or `RT001T/01`.
    pub component: String,
    /// Optional manufacturer/type reference.
    pub type_code: Option<String>,
}

impl Identifier {
    /// Returns a copy with every field run through its normalizer.
    ///
    /// This strips the revision suffix from `system` and any stray leading
    /// separators that survived parsing. Idempotent.
    pub fn normalized(&self) -> Identifier {
        Identifier {
            building: self
                .building
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            system: normalize_system(&self.system),
            component: normalize_component(&self.component),
            type_code: self
                .type_code
                .as_deref()
                .map(normalize_type_code)
                .filter(|t| !t.is_empty()),
        }
    }
}
