//! Removing entities named by server deletion records

use std::collections::{BTreeMap, HashSet};

use crate::models::{Deletion, EntityKind, Identified, Snapshot};

/// Remove every entity named by `deletions` from `snapshot`.
///
/// Records for budgets are skipped (budgets have no id to delete by), and
/// records naming entity types this client does not model are ignored.
/// Collections the snapshot has never received are left absent.
pub fn apply_deletions(snapshot: &mut Snapshot, deletions: &[Deletion]) {
    let mut by_kind: BTreeMap<EntityKind, HashSet<String>> = BTreeMap::new();
    for deletion in deletions {
        match deletion.kind() {
            Some(kind) => {
                by_kind
                    .entry(kind)
                    .or_default()
                    .insert(deletion.id.clone());
            }
            None => tracing::debug!(
                object = %deletion.object,
                id = %deletion.id,
                "Ignoring deletion for unknown entity type"
            ),
        }
    }

    for (kind, ids) in &by_kind {
        match kind {
            EntityKind::Instrument => remove_listed(&mut snapshot.instrument, ids),
            EntityKind::Company => remove_listed(&mut snapshot.company, ids),
            EntityKind::User => remove_listed(&mut snapshot.user, ids),
            EntityKind::Account => remove_listed(&mut snapshot.account, ids),
            EntityKind::Tag => remove_listed(&mut snapshot.tag, ids),
            EntityKind::Merchant => remove_listed(&mut snapshot.merchant, ids),
            EntityKind::Budget => {}
            EntityKind::Reminder => remove_listed(&mut snapshot.reminder, ids),
            EntityKind::ReminderMarker => remove_listed(&mut snapshot.reminder_marker, ids),
            EntityKind::Transaction => remove_listed(&mut snapshot.transaction, ids),
        }
    }
}

fn remove_listed<E: Identified>(collection: &mut Option<Vec<E>>, ids: &HashSet<String>) {
    if let Some(entities) = collection {
        entities.retain(|entity| !ids.contains(&entity.entity_id()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::fixtures::{budget, deletion, transaction, user};
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_listed_transactions() {
        let mut snapshot = Snapshot {
            transaction: Some(vec![transaction("x", 1.0), transaction("y", 2.0)]),
            ..Default::default()
        };

        apply_deletions(&mut snapshot, &[deletion("transaction", "x")]);
        assert_eq!(snapshot.transaction, Some(vec![transaction("y", 2.0)]));
    }

    #[test]
    fn numeric_ids_match_by_string_form() {
        let mut snapshot = Snapshot {
            user: Some(vec![user(1, "a"), user(2, "b")]),
            ..Default::default()
        };

        apply_deletions(&mut snapshot, &[deletion("user", "2")]);
        assert_eq!(snapshot.user, Some(vec![user(1, "a")]));
    }

    #[test]
    fn budget_deletions_are_ignored() {
        let budgets = vec![budget(Some("t1"), "2024-01-01", 10.0)];
        let mut snapshot = Snapshot {
            budget: Some(budgets.clone()),
            ..Default::default()
        };

        apply_deletions(
            &mut snapshot,
            &[
                deletion("budget", "t1:2024-01-01"),
                deletion("budget", "t1"),
                deletion("budget", ""),
            ],
        );
        assert_eq!(snapshot.budget, Some(budgets));
    }

    #[test]
    fn unknown_types_and_absent_collections_are_skipped() {
        let mut snapshot = Snapshot {
            transaction: Some(vec![transaction("x", 1.0)]),
            ..Default::default()
        };

        apply_deletions(
            &mut snapshot,
            &[deletion("goal", "x"), deletion("merchant", "m1")],
        );
        assert_eq!(snapshot.transaction, Some(vec![transaction("x", 1.0)]));
        assert_eq!(snapshot.merchant, None);
    }

    #[test]
    fn groups_multiple_ids_per_type() {
        let mut snapshot = Snapshot {
            transaction: Some(vec![
                transaction("x", 1.0),
                transaction("y", 2.0),
                transaction("z", 3.0),
            ]),
            ..Default::default()
        };

        apply_deletions(
            &mut snapshot,
            &[deletion("transaction", "x"), deletion("transaction", "z")],
        );
        assert_eq!(snapshot.transaction, Some(vec![transaction("y", 2.0)]));
    }
}
