#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use actix_web::web;
use anyhow::{Result, anyhow};
use fake::Fake;
use fake::faker::internet::en::{SafeEmail, Username};

use morefans::database::models::{User, UserRole};
use morefans::database::{DocumentStore, MemoryBackend};
use morefans::{AppState, Config, SeedService, TeamRepository, UserRepository};

pub const FAN_USER_ID: &str = "fan-user-123";
pub const SPONSOR_USER_ID: &str = "sponsor-user-456";

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory store plus the configuration the app is built with.
pub struct TestContext {
    pub backend: Arc<MemoryBackend>,
    pub store: DocumentStore,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let config = Config::in_memory();
        let backend = Arc::new(MemoryBackend::new());
        let store = DocumentStore::new(backend.clone(), &config.storage_prefix);

        TestContext {
            backend,
            store,
            config,
        }
    }

    /// Fresh store with the demo users, team and objective.
    pub async fn seeded() -> Result<Self> {
        let ctx = Self::new();
        SeedService::new(ctx.store.clone())
            .initialize_sample_data(&ctx.config.fan_user_id, &ctx.config.sponsor_user_id)
            .await?;
        Ok(ctx)
    }

    pub fn state(&self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.store.clone(), self.config.clone()))
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.store.clone())
    }

    pub fn teams(&self) -> TeamRepository {
        TeamRepository::new(self.store.clone())
    }

    pub async fn cobra_id(&self) -> Result<String> {
        self.teams()
            .get_all_teams()
            .await?
            .into_iter()
            .find(|team| team.name == "Project COBRA")
            .map(|team| team.team_id)
            .ok_or_else(|| anyhow!("Project COBRA not seeded"))
    }

    pub async fn balance(&self, user_id: &str) -> Result<i64> {
        let user = self
            .users()
            .get_user(user_id)
            .await?
            .ok_or_else(|| anyhow!("user {} missing", user_id))?;
        Ok(user.wallet_balance)
    }

    pub async fn team_earnings(&self, team_id: &str) -> Result<i64> {
        let team = self
            .teams()
            .get_team(team_id)
            .await?
            .ok_or_else(|| anyhow!("team {} missing", team_id))?;
        Ok(team.metrics.total_earnings)
    }

    pub async fn create_fake_fan(&self) -> Result<User> {
        let email: String = SafeEmail().fake();
        let username: String = Username().fake();
        let user_id = format!("fan-{}", uuid::Uuid::new_v4());

        Ok(self
            .users()
            .create_user(&user_id, &email, &username, UserRole::Fan, None)
            .await?)
    }
}
