//! Server-owned reference data: currencies, banks and users

use serde::{Deserialize, Serialize};

use super::Identified;

/// A currency or other unit an account can be denominated in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: i64,
    pub changed: i64,
    pub title: String,
    pub short_title: String,
    pub symbol: String,
    /// Exchange rate to the base instrument
    pub rate: f64,
}

/// A bank or other financial institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub changed: i64,
    pub title: String,
    pub full_title: Option<String>,
    pub www: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub changed: i64,
    pub login: Option<String>,
    /// Instrument id of the user's main currency
    pub currency: i64,
    pub parent: Option<i64>,
}

impl Identified for Instrument {
    fn entity_id(&self) -> String {
        self.id.to_string()
    }
}

impl Identified for Company {
    fn entity_id(&self) -> String {
        self.id.to_string()
    }
}

impl Identified for User {
    fn entity_id(&self) -> String {
        self.id.to_string()
    }
}
