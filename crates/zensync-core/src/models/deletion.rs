//! Entity type tags and deletion records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The ten entity types carried by a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Instrument,
    Company,
    User,
    Account,
    Tag,
    Merchant,
    Budget,
    Reminder,
    ReminderMarker,
    Transaction,
}

impl EntityKind {
    pub const ALL: [Self; 10] = [
        Self::Instrument,
        Self::Company,
        Self::User,
        Self::Account,
        Self::Tag,
        Self::Merchant,
        Self::Budget,
        Self::Reminder,
        Self::ReminderMarker,
        Self::Transaction,
    ];

    /// Wire name, as used in diff payloads and deletion records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instrument => "instrument",
            Self::Company => "company",
            Self::User => "user",
            Self::Account => "account",
            Self::Tag => "tag",
            Self::Merchant => "merchant",
            Self::Budget => "budget",
            Self::Reminder => "reminder",
            Self::ReminderMarker => "reminderMarker",
            Self::Transaction => "transaction",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire name does not match any modeled entity type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity type: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Server notice that an entity was removed.
///
/// `object` is kept as the raw wire string so records for entity types this
/// client does not model still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deletion {
    /// Numeric ids (instruments, companies, users) are stored in text form.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub object: String,
    pub stamp: i64,
    pub user: i64,
}

impl Deletion {
    /// Parsed entity type, or `None` for types this client does not model.
    pub fn kind(&self) -> Option<EntityKind> {
        self.object.parse().ok()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(id) => id,
        WireId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_round_trips_wire_names() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>(), Ok(kind));
        }
    }

    #[test]
    fn entity_kind_serializes_as_camel_case() {
        let raw = serde_json::to_string(&EntityKind::ReminderMarker).unwrap();
        assert_eq!(raw, "\"reminderMarker\"");
    }

    #[test]
    fn deletion_kind_tolerates_unknown_objects() {
        let deletion = Deletion {
            id: "x".to_string(),
            object: "goal".to_string(),
            stamp: 1,
            user: 1,
        };
        assert_eq!(deletion.kind(), None);
    }

    #[test]
    fn deletion_accepts_numeric_and_text_ids() {
        let numeric: Deletion = serde_json::from_str(
            r#"{"id": 42, "object": "instrument", "stamp": 9, "user": 1}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, "42");
        assert_eq!(numeric.kind(), Some(EntityKind::Instrument));

        let text: Deletion = serde_json::from_str(
            r#"{"id": "2b6c", "object": "transaction", "stamp": 9, "user": 1}"#,
        )
        .unwrap();
        assert_eq!(text.id, "2b6c");
    }

    #[test]
    fn deletion_rejects_non_scalar_id() {
        let parsed = serde_json::from_str::<Deletion>(
            r#"{"id": [1], "object": "user", "stamp": 9, "user": 1}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_entity_kind_names_the_input() {
        let error = "goal".parse::<EntityKind>().unwrap_err();
        assert_eq!(error.to_string(), "unknown entity type: goal");
    }
}
