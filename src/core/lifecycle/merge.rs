use crate::core::tree::{MergeSummary, TranslationTree};

use super::KeyMap;

/// Union of extracted and generated keys.
///
/// On an exact key match the extracted entry wins; the generated entry's
/// locations are appended after the extracted ones.
pub fn complete_keys(extracted: &KeyMap, generated: &KeyMap) -> KeyMap {
    let mut merged = extracted.clone();
    for entry in generated.iter() {
        merged.insert_or_extend(entry.clone());
    }
    merged
}

/// Lay `generated` over a baseline tree. Baseline values always win, new
/// keys are added, leaf/branch collisions keep the leaf under `_value`.
pub fn overlay_baseline(
    baseline: &TranslationTree,
    generated: &TranslationTree,
) -> (TranslationTree, MergeSummary) {
    let mut merged = baseline.clone();
    let summary = merged.merge(generated);
    for key in &summary.preserved {
        tracing::debug!(key = %key, "kept existing value under _value");
    }
    (merged, summary)
}
