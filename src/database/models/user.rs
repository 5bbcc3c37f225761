use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const USERS: &str = "users";

/// Every new wallet starts with this many units.
pub const STARTING_BALANCE: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub password: Option<String>,
    pub wallet_balance: i64,
    #[serde(default)]
    pub following_teams: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn new(
        user_id: &str,
        email: &str,
        username: &str,
        role: UserRole,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            role,
            password: password_hash,
            wallet_balance: STARTING_BALANCE,
            following_teams: Vec::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_following(&self, team_id: &str) -> bool {
        self.following_teams.iter().any(|id| id == team_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Fan,
    Sponsor,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Fan => write!(f, "fan"),
            UserRole::Sponsor => write!(f, "sponsor"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fan" => Ok(UserRole::Fan),
            "sponsor" => Ok(UserRole::Sponsor),
            _ => Err(format!("Invalid UserRole: {}", s)),
        }
    }
}

/// User as exposed over HTTP, without the password field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub wallet_balance: i64,
    pub following_teams: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            username: user.username,
            role: user.role,
            wallet_balance: user.wallet_balance,
            following_teams: user.following_teams,
            created_at: user.created_at,
        }
    }
}
