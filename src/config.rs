use anyhow::{Result, anyhow};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    S3,
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s3" => Ok(StorageKind::S3),
            "memory" | "local" => Ok(StorageKind::Memory),
            other => Err(anyhow!("Invalid STORAGE_BACKEND: {}", other)),
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::S3 => write!(f, "s3"),
            StorageKind::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub storage: StorageKind,
    pub s3_bucket: String,
    pub aws_region: String,
    pub storage_prefix: String,
    /// Acting user for requests that carry no `user_id`. There is no session.
    pub fan_user_id: String,
    pub sponsor_user_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) if env::var("S3_BUCKET").is_ok() => StorageKind::S3,
            Err(_) => StorageKind::Memory,
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            storage,
            s3_bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "mithrilmedia".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            storage_prefix: env::var("STORAGE_PREFIX").unwrap_or_else(|_| "morefans".to_string()),
            fan_user_id: env::var("FAN_USER_ID").unwrap_or_else(|_| "fan-user-123".to_string()),
            sponsor_user_id: env::var("SPONSOR_USER_ID")
                .unwrap_or_else(|_| "sponsor-user-456".to_string()),
        })
    }

    /// In-memory configuration with the demo user ids, for tests and local runs.
    pub fn in_memory() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            storage: StorageKind::Memory,
            s3_bucket: String::new(),
            aws_region: "us-east-1".to_string(),
            storage_prefix: "morefans".to_string(),
            fan_user_id: "fan-user-123".to_string(),
            sponsor_user_id: "sponsor-user-456".to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
