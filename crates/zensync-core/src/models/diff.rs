//! Diff payloads and the merged snapshot

use serde::{Deserialize, Serialize};

use super::{
    Account, Budget, Company, Deletion, EntityKind, Instrument, Merchant, Reminder,
    ReminderMarker, Tag, Transaction, User,
};

/// Body of a `POST /diff/` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    /// Client wall clock, seconds since epoch
    pub current_client_timestamp: i64,
    /// Watermark to diff from; `0` requests the full state
    pub server_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_fetch: Option<Vec<EntityKind>>,
}

/// Server response: every change since the requested watermark.
///
/// Collections are sparse; an absent collection means "no changes of that
/// type".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diff {
    pub server_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<Vec<Instrument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Vec<Company>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Vec<Merchant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Vec<Budget>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<Vec<Reminder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_marker: Option<Vec<ReminderMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Vec<Transaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion: Option<Vec<Deletion>>,
}

impl Diff {
    /// Treat a diff anchored at timestamp 0 as complete server state.
    ///
    /// Deletion records are dropped: there is no prior state for them to
    /// apply to.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            server_timestamp: self.server_timestamp,
            instrument: self.instrument,
            company: self.company,
            user: self.user,
            account: self.account,
            tag: self.tag,
            merchant: self.merchant,
            budget: self.budget,
            reminder: self.reminder,
            reminder_marker: self.reminder_marker,
            transaction: self.transaction,
        }
    }

    /// Number of upserts carried for `kind`, or `None` if the type is absent.
    pub fn len_of(&self, kind: EntityKind) -> Option<usize> {
        match kind {
            EntityKind::Instrument => self.instrument.as_ref().map(Vec::len),
            EntityKind::Company => self.company.as_ref().map(Vec::len),
            EntityKind::User => self.user.as_ref().map(Vec::len),
            EntityKind::Account => self.account.as_ref().map(Vec::len),
            EntityKind::Tag => self.tag.as_ref().map(Vec::len),
            EntityKind::Merchant => self.merchant.as_ref().map(Vec::len),
            EntityKind::Budget => self.budget.as_ref().map(Vec::len),
            EntityKind::Reminder => self.reminder.as_ref().map(Vec::len),
            EntityKind::ReminderMarker => self.reminder_marker.as_ref().map(Vec::len),
            EntityKind::Transaction => self.transaction.as_ref().map(Vec::len),
        }
    }
}

/// Locally merged view of the whole account as of `server_timestamp`.
///
/// A collection is `None` when the server has never sent that type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub server_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<Vec<Instrument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Vec<Company>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Vec<Merchant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Vec<Budget>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<Vec<Reminder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_marker: Option<Vec<ReminderMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Vec<Transaction>>,
}

impl Snapshot {
    /// Number of entities held for `kind`, or `None` if the collection is absent.
    pub fn len_of(&self, kind: EntityKind) -> Option<usize> {
        match kind {
            EntityKind::Instrument => self.instrument.as_ref().map(Vec::len),
            EntityKind::Company => self.company.as_ref().map(Vec::len),
            EntityKind::User => self.user.as_ref().map(Vec::len),
            EntityKind::Account => self.account.as_ref().map(Vec::len),
            EntityKind::Tag => self.tag.as_ref().map(Vec::len),
            EntityKind::Merchant => self.merchant.as_ref().map(Vec::len),
            EntityKind::Budget => self.budget.as_ref().map(Vec::len),
            EntityKind::Reminder => self.reminder.as_ref().map(Vec::len),
            EntityKind::ReminderMarker => self.reminder_marker.as_ref().map(Vec::len),
            EntityKind::Transaction => self.transaction.as_ref().map(Vec::len),
        }
    }

    /// Entity counts for every type, absent collections counted as zero.
    pub fn counts(&self) -> Vec<(EntityKind, usize)> {
        EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, self.len_of(kind).unwrap_or(0)))
            .collect()
    }
}
