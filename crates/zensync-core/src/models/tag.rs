//! Tag (category) and merchant models

use serde::{Deserialize, Serialize};

use super::Identified;

/// A spending/income category; tags form a two-level tree via `parent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub title: String,
    pub parent: Option<String>,
    pub icon: Option<String>,
    pub picture: Option<String>,
    pub color: Option<i64>,
    pub show_income: bool,
    pub show_outcome: bool,
    pub budget_income: bool,
    pub budget_outcome: bool,
    pub required: Option<bool>,
}

/// A payee the user has saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub title: String,
}

impl Identified for Tag {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}

impl Identified for Merchant {
    fn entity_id(&self) -> String {
        self.id.clone()
    }
}
