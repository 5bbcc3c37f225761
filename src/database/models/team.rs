use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TEAMS: &str = "teams";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
    pub metrics: TeamMetrics,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub total_objectives_completed: i64,
    /// Percentage, 0-100.
    pub success_rate: i64,
    pub total_earnings: i64,
}

impl Team {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            team_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: slugify(name),
            description: description.to_string(),
            members: Vec::new(),
            sponsors: Vec::new(),
            metrics: TeamMetrics::default(),
            verified: false,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Lower-case the name and turn spaces into hyphens. Other characters are
/// kept as they are.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Team annotated with the number of users following it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithFans {
    #[serde(flatten)]
    pub team: Team,
    pub fan_count: usize,
}
