//! Scheduled (reminder) and planned (reminder marker) operations

use serde::{Deserialize, Serialize};

use super::{Identified, Interval};

/// A recurring planned operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub income_instrument: i64,
    pub income_account: String,
    pub income: f64,
    pub outcome_instrument: i64,
    pub outcome_account: String,
    pub outcome: f64,
    pub tag: Option<Vec<String>>,
    pub merchant: Option<String>,
    pub payee: Option<String>,
    pub comment: Option<String>,
    pub interval: Option<Interval>,
    pub step: Option<i64>,
    pub points: Option<Vec<i64>>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub notify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Planned,
    Processed,
    Deleted,
}

/// One dated occurrence of a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMarker {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub income_instrument: i64,
    pub income_account: String,
    pub income: f64,
    pub outcome_instrument: i64,
    pub outcome_account: String,
    pub outcome: f64,
    pub tag: Option<Vec<String>>,
    pub merchant: Option<String>,
    pub payee: Option<String>,
    pub comment: Option<String>,
    pub date: String,
    /// Id of the owning reminder
    pub reminder: String,
    pub state: MarkerState,
    pub notify: bool,
}

impl Identified for Reminder {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}

impl Identified for ReminderMarker {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}
