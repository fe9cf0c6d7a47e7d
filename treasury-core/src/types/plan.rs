//! Reading plan types

use serde::{Deserialize, Serialize};

/// A multi-day reading plan over one book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlan {
    pub plan_id: String,

    /// The book this plan walks through
    pub book_id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Number of days in the plan
    pub duration: u32,

    pub schedule: Vec<PlanDay>,
}

/// One scheduled day of a reading plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDay {
    pub day: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

impl ReadingPlan {
    pub fn day(&self, day: u32) -> Option<&PlanDay> {
        self.schedule.iter().find(|d| d.day == day)
    }
}
