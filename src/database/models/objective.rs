use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const OBJECTIVES: &str = "objectives";

/// Category given to objectives created without one. Older documents may
/// carry a `null` category instead.
pub const DEFAULT_CATEGORY: &str = "general";

/// Text fields are nullable in stored documents and read back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub objective_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rewards: Rewards,
    pub deadline: NaiveDateTime,
    pub status: ObjectiveStatus,
    pub created_at: NaiveDateTime,
}

/// Fields left out of a rewards object take their default amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Rewards {
    pub points: i64,
    pub currency: i64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            points: 1000,
            currency: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveStatus {
    Active,
    Completed,
    Expired,
    #[serde(other)]
    Inactive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rewards: Option<Rewards>,
}

/// Every objective currently closes at the end of 2025.
pub fn objective_deadline() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl Objective {
    pub fn new(input: ObjectiveInput) -> Self {
        Self {
            objective_id: Uuid::new_v4().to_string(),
            title: Some(input.title.unwrap_or_default()),
            description: Some(input.description.unwrap_or_default()),
            category: Some(
                input
                    .category
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ),
            rewards: input.rewards.unwrap_or_default(),
            deadline: objective_deadline(),
            status: ObjectiveStatus::Active,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ObjectiveStatus::Active
    }
}
