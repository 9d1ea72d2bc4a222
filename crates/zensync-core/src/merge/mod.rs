//! Folding server diffs into a snapshot.
//!
//! The server always sends complete entities, never field patches, so a
//! merge is a keyed replace: an incoming entity wins over an existing one with
//! the same key. Deletions are applied after all upserts of the same diff.

mod deletions;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{Budget, Diff, Identified, Snapshot};

pub use deletions::apply_deletions;

/// Merge `incoming` into `existing`, keyed by entity id.
///
/// Existing entities keep their position when replaced; new ids are appended
/// in incoming order. An empty `incoming` returns `existing` untouched.
pub fn merge_entities<E: Identified>(existing: Vec<E>, incoming: Vec<E>) -> Vec<E> {
    merge_by_key(existing, incoming, E::entity_id)
}

/// Merge budgets keyed by their `(tag, date)` composite key.
pub fn merge_budgets(existing: Vec<Budget>, incoming: Vec<Budget>) -> Vec<Budget> {
    merge_by_key(existing, incoming, Budget::composite_key)
}

fn merge_by_key<E>(existing: Vec<E>, incoming: Vec<E>, key: impl Fn(&E) -> String) -> Vec<E> {
    if incoming.is_empty() {
        return existing;
    }

    let mut merged: Vec<E> = Vec::with_capacity(existing.len() + incoming.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(merged.capacity());

    for entity in existing.into_iter().chain(incoming) {
        match positions.entry(key(&entity)) {
            Entry::Occupied(slot) => merged[*slot.get()] = entity,
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(entity);
            }
        }
    }

    merged
}

fn merge_collection<E>(
    existing: Option<Vec<E>>,
    incoming: Option<Vec<E>>,
    merge: fn(Vec<E>, Vec<E>) -> Vec<E>,
) -> Option<Vec<E>> {
    match incoming {
        Some(incoming) if !incoming.is_empty() => {
            Some(merge(existing.unwrap_or_default(), incoming))
        }
        _ => existing,
    }
}

/// Fold one diff into a snapshot.
///
/// Types absent from the diff (or present but empty) are carried over
/// unchanged. The watermark never moves backwards: a diff stamped earlier than
/// the snapshot still has its entities merged, but the snapshot keeps its
/// newer timestamp.
#[must_use]
pub fn merge_diff(snapshot: Snapshot, diff: Diff) -> Snapshot {
    let server_timestamp = if diff.server_timestamp < snapshot.server_timestamp {
        tracing::warn!(
            snapshot = snapshot.server_timestamp,
            diff = diff.server_timestamp,
            "Diff is older than snapshot; keeping snapshot watermark"
        );
        snapshot.server_timestamp
    } else {
        diff.server_timestamp
    };

    let mut merged = Snapshot {
        server_timestamp,
        instrument: merge_collection(snapshot.instrument, diff.instrument, merge_entities),
        company: merge_collection(snapshot.company, diff.company, merge_entities),
        user: merge_collection(snapshot.user, diff.user, merge_entities),
        account: merge_collection(snapshot.account, diff.account, merge_entities),
        tag: merge_collection(snapshot.tag, diff.tag, merge_entities),
        merchant: merge_collection(snapshot.merchant, diff.merchant, merge_entities),
        budget: merge_collection(snapshot.budget, diff.budget, merge_budgets),
        reminder: merge_collection(snapshot.reminder, diff.reminder, merge_entities),
        reminder_marker: merge_collection(
            snapshot.reminder_marker,
            diff.reminder_marker,
            merge_entities,
        ),
        transaction: merge_collection(snapshot.transaction, diff.transaction, merge_entities),
    };

    if let Some(deletions) = diff.deletion.filter(|deletions| !deletions.is_empty()) {
        apply_deletions(&mut merged, &deletions);
    }

    merged
}
