//! Transaction model

use serde::{Deserialize, Serialize};

use super::Identified;

/// A money movement between accounts.
///
/// Income and outcome sides are both always present; a pure expense has
/// `income == 0` and both accounts set to the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub changed: i64,
    pub created: i64,
    pub user: i64,
    /// Soft delete flag set by the server
    pub deleted: bool,
    pub hold: Option<bool>,
    pub income_instrument: i64,
    pub income_account: String,
    pub income: f64,
    pub outcome_instrument: i64,
    pub outcome_account: String,
    pub outcome: f64,
    pub tag: Option<Vec<String>>,
    pub merchant: Option<String>,
    pub payee: Option<String>,
    pub original_payee: Option<String>,
    pub comment: Option<String>,
    pub date: String,
    pub mcc: Option<i64>,
    pub reminder_marker: Option<String>,
    // Amounts in the operation's original currency
    pub op_income: Option<f64>,
    pub op_income_instrument: Option<i64>,
    pub op_outcome: Option<f64>,
    pub op_outcome_instrument: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Identified for Transaction {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}
