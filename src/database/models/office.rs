use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::cmp::Ordering;

/// Office projection used by the office directory and portal sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSummary {
    pub id: i32,
    pub name: String,
    pub brokerage_name: String,
}

/// Directory order: name, then brokerage name, then id
impl Ord for OfficeSummary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.brokerage_name.cmp(&other.brokerage_name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for OfficeSummary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
