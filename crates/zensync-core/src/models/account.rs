//! Account model

use serde::{Deserialize, Serialize};

use super::{Identified, Interval};

/// Kind of account as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Cash,
    /// Credit or debit card
    Ccard,
    Checking,
    Loan,
    Deposit,
    /// Electronic wallet
    Emoney,
    /// Virtual account tracking debts between people
    Debt,
}

/// A money account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub role: Option<i64>,
    pub instrument: Option<i64>,
    pub company: Option<i64>,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub title: String,
    #[serde(rename = "syncID")]
    pub sync_id: Option<Vec<String>>,
    pub balance: Option<f64>,
    pub start_balance: Option<f64>,
    pub credit_limit: Option<f64>,
    pub in_balance: bool,
    pub savings: Option<bool>,
    pub enable_correction: bool,
    #[serde(rename = "enableSMS")]
    pub enable_sms: bool,
    pub archive: bool,
    // Loan and deposit terms
    pub capitalization: Option<bool>,
    pub percent: Option<f64>,
    pub start_date: Option<String>,
    pub end_date_offset: Option<i64>,
    pub end_date_offset_interval: Option<Interval>,
    pub payoff_step: Option<i64>,
    pub payoff_interval: Option<Interval>,
}

impl Identified for Account {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}
