//! Budget model

use serde::{Deserialize, Serialize};

/// Planned income/outcome for one category in one month.
///
/// Budgets carry no identifier of their own. Two records with the same
/// `(tag, date)` pair describe the same budget line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub changed: i64,
    pub user: i64,
    /// Category id, or `None` for the whole-month budget
    pub tag: Option<String>,
    /// First day of the budgeted month (`yyyy-MM-dd`)
    pub date: String,
    pub income: f64,
    pub income_lock: bool,
    pub outcome: f64,
    pub outcome_lock: bool,
}

impl Budget {
    /// Identity key rendered as `"<tag-or-empty>:<date>"`.
    #[must_use]
    pub fn composite_key(&self) -> String {
        format!("{}:{}", self.tag.as_deref().unwrap_or_default(), self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(tag: Option<&str>, date: &str) -> Budget {
        Budget {
            changed: 0,
            user: 1,
            tag: tag.map(str::to_string),
            date: date.to_string(),
            income: 0.0,
            income_lock: false,
            outcome: 0.0,
            outcome_lock: false,
        }
    }

    #[test]
    fn composite_key_uses_empty_tag_for_month_total() {
        assert_eq!(budget(None, "2024-01-01").composite_key(), ":2024-01-01");
        assert_eq!(
            budget(Some("t1"), "2024-01-01").composite_key(),
            "t1:2024-01-01"
        );
    }
}
