use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{PredictConfig, MIN_PREFIX_LEN};
use crate::error::DisciplineError;

/// One sibling system's recorded per-discipline values.
///
/// System codes arrive already normalized; this crate only depends on the
/// rest of the engine through that representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiblingSystem {
    pub system: String,
    /// Discipline name → values recorded for this system, e.g.
    /// `"Elektro" → ["Kabling og kobling", "Merking"]`.
    #[serde(default)]
    pub disciplines: HashMap<String, Vec<String>>,
}

/// Derives the dot-delimited category prefix of a system code.
///
/// `"360.0001"` → `"360"`. Returns `None` when the derived prefix is
/// shorter than [`MIN_PREFIX_LEN`], too unspecific to group on.
pub fn system_prefix(code: &str) -> Option<&str> {
    let prefix = code.trim().split('.').next().unwrap_or("");
    (prefix.len() >= MIN_PREFIX_LEN).then_some(prefix)
}

/// Predicts likely discipline values for a target system from its siblings.
///
/// For each discipline, every sibling row that shares the target's prefix
/// votes once per distinct value it recorded. A value is predicted when its
/// vote count reaches `cfg.majority_share` of the number of siblings
/// considered, meaning the *full* sibling count, not the per-discipline row
/// count (see [`DEFAULT_MAJORITY_SHARE`](crate::DEFAULT_MAJORITY_SHARE) for
/// why that denominator choice matters). Disciplines with no value above
/// threshold are omitted from the result entirely.
///
/// Siblings equal to the target or under another prefix are ignored, as is
/// a target whose prefix is too short to be meaningful.
pub fn predict(
    target_system: &str,
    siblings: &[SiblingSystem],
    cfg: &PredictConfig,
) -> Result<BTreeMap<String, Vec<String>>, DisciplineError> {
    cfg.validate()?;

    let target = target_system.trim();
    let Some(prefix) = system_prefix(target) else {
        return Ok(BTreeMap::new());
    };

    let considered: Vec<&SiblingSystem> = siblings
        .iter()
        .filter(|s| s.system.trim() != target && system_prefix(&s.system) == Some(prefix))
        .collect();
    if considered.is_empty() {
        return Ok(BTreeMap::new());
    }

    // Tallies keep insertion order per discipline so ties break by first
    // appearance across the sibling rows.
    let mut tallies: BTreeMap<String, Vec<(String, u32)>> = BTreeMap::new();
    for sibling in &considered {
        for (discipline, values) in &sibling.disciplines {
            let tally = tallies.entry(discipline.trim().to_string()).or_default();
            // One vote per distinct value per sibling row.
            let mut voted: HashSet<&str> = HashSet::new();
            for value in values {
                let value = value.trim();
                if value.is_empty() || !voted.insert(value) {
                    continue;
                }
                match tally.iter_mut().find(|(v, _)| v == value) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((value.to_string(), 1)),
                }
            }
        }
    }

    let threshold = cfg.majority_share * considered.len() as f32;
    let mut predictions = BTreeMap::new();
    for (discipline, mut tally) in tallies {
        if discipline.is_empty() {
            continue;
        }
        tally.retain(|(_, count)| *count as f32 >= threshold);
        if tally.is_empty() {
            continue;
        }
        // Most common first; stable sort preserves first-appearance ties.
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        predictions.insert(
            discipline,
            tally.into_iter().map(|(value, _)| value).collect(),
        );
    }

    debug!(
        target = %target,
        prefix,
        siblings = considered.len(),
        disciplines = predictions.len(),
        "discipline_prediction_complete"
    );

    Ok(predictions)
}
