//! Data models for the ZenMoney diff protocol

mod account;
mod budget;
mod deletion;
mod diff;
mod reference;
mod reminder;
mod tag;
mod transaction;

use serde::{Deserialize, Serialize};

pub use account::{Account, AccountType};
pub use budget::Budget;
pub use deletion::{Deletion, EntityKind, UnknownEntityKind};
pub use diff::{Diff, DiffRequest, Snapshot};
pub use reference::{Company, Instrument, User};
pub use reminder::{MarkerState, Reminder, ReminderMarker};
pub use tag::{Merchant, Tag};
pub use transaction::Transaction;

/// Entities that carry a stable server-assigned `id`.
///
/// Ids are numeric for some types and strings for others; both are compared
/// through their string form.
pub trait Identified {
    fn entity_id(&self) -> String;
}

/// Recurrence unit used by reminders and loan/deposit terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Week,
    Month,
    Year,
}
