use std::collections::HashMap;

use grammar::{normalize_component, normalize_system};

use crate::types::DocumentComponent;

/// Build-once, read-many lookup over one document's detected components.
///
/// Keys are the normalized component code and, when the component carries a
/// system, the `{system}{component}` concatenation, so an entry can match
/// a bare code or a position-independent concatenated rendering with the
/// same O(1) probe. First record wins per key.
///
/// Construction is O(N); the index is immutable afterwards and safe to
/// share read-only across concurrent matches. Rebuild it per request: the
/// underlying document set can change between requests.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    by_key: HashMap<String, DocumentComponent>,
}

impl DocumentIndex {
    /// Indexes a document's components under their normalized keys.
    pub fn build(components: &[DocumentComponent]) -> Self {
        let mut by_key: HashMap<String, DocumentComponent> =
            HashMap::with_capacity(components.len() * 2);
        for component in components {
            let code = normalize_component(&component.code);
            if code.is_empty() {
                continue;
            }
            by_key
                .entry(code.clone())
                .or_insert_with(|| component.clone());
            if let Some(system) = component.system.as_deref() {
                let system = normalize_system(system);
                if !system.is_empty() {
                    by_key
                        .entry(format!("{system}{code}"))
                        .or_insert_with(|| component.clone());
                }
            }
        }
        Self { by_key }
    }

    /// Looks up a single candidate variant. The key must already be in the
    /// normalized key space, which everything from
    /// [`generate_variants`](crate::generate_variants) is.
    pub fn get(&self, key: &str) -> Option<&DocumentComponent> {
        self.by_key.get(key)
    }

    /// Number of distinct keys (not components) in the index.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
