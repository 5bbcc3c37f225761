//! Demo data bootstrap.
//!
//! Runs once at startup before the server accepts requests. The first run
//! claims the `_meta/seed` sentinel document with a conditional create and
//! marks it `done` once every step succeeded. A later start that finds a
//! `done` claim skips the whole step. A claim left `started` by a run that
//! failed midway is resumed: the steps inspect the store and only create what
//! is missing.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::database::{
    DocumentStore, StoreError,
    models::{OBJECTIVES, ObjectiveInput, Rewards, UserRole},
    repositories::{ObjectiveRepository, TeamRepository, UserRepository},
};

const META: &str = "_meta";
const SEED_SENTINEL: &str = "seed";

pub const DEMO_TEAM_NAME: &str = "Project COBRA";
const DEMO_TEAM_DESCRIPTION: &str =
    "Protecting individual privacy in an increasingly connected digital world";
const DEMO_TEAM_SUCCESS_RATE: i64 = 95;

const DEMO_OBJECTIVE_TITLE: &str = "Privacy Shield Beta Test";
const DEMO_OBJECTIVE_DESCRIPTION: &str =
    "Deploy and test privacy protection software with 100 beta users";
const DEMO_OBJECTIVE_CATEGORY: &str = "development";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum SeedState {
    #[default]
    Started,
    Done,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedClaim {
    claimed_at: String,
    #[serde(default)]
    state: SeedState,
}

impl SeedClaim {
    fn new(state: SeedState) -> Self {
        Self {
            claimed_at: Utc::now().naive_utc().to_string(),
            state,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// An earlier run already finished; nothing was inspected or created.
    pub skipped: bool,
    /// An earlier run claimed the seed but never marked it done.
    pub resumed: bool,
    pub users_created: usize,
    pub team_id: Option<String>,
    pub objective_id: Option<String>,
}

pub struct SeedService {
    store: DocumentStore,
    users: UserRepository,
    teams: TeamRepository,
    objectives: ObjectiveRepository,
}

impl SeedService {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            teams: TeamRepository::new(store.clone()),
            objectives: ObjectiveRepository::new(store.clone()),
            store,
        }
    }

    pub async fn initialize_sample_data(
        &self,
        fan_user_id: &str,
        sponsor_user_id: &str,
    ) -> Result<SeedReport, StoreError> {
        let mut report = SeedReport::default();

        let claim = SeedClaim::new(SeedState::Started);
        if !self.store.put_if_absent(META, SEED_SENTINEL, &claim).await? {
            let existing: Option<SeedClaim> = self.store.get(META, SEED_SENTINEL).await?;
            if existing.is_some_and(|claim| claim.state == SeedState::Done) {
                log::info!("Sample data already initialized, skipping seed");
                return Ok(SeedReport {
                    skipped: true,
                    ..Default::default()
                });
            }
            log::warn!("Previous seed run did not finish, resuming");
            report.resumed = true;
        }

        let users = self.users.get_all_users().await?;
        let demo_users = [
            (fan_user_id, "testfan@example.com", "testfan", UserRole::Fan),
            (sponsor_user_id, "sponsor@example.com", "sponsor", UserRole::Sponsor),
        ];
        for (user_id, email, username, role) in demo_users {
            if !users.iter().any(|user| user.user_id == user_id) {
                self.users
                    .create_user(user_id, email, username, role, None)
                    .await?;
                report.users_created += 1;
            }
        }

        let teams = self.teams.get_all_teams().await?;
        if teams.is_empty() {
            let mut cobra = self
                .teams
                .create_team(DEMO_TEAM_NAME, DEMO_TEAM_DESCRIPTION)
                .await?;
            cobra.verified = true;
            cobra.metrics.success_rate = DEMO_TEAM_SUCCESS_RATE;
            self.teams.save(&cobra).await?;
            report.team_id = Some(cobra.team_id);
        }

        // A resumed run may have stopped between the team and its objective.
        let objective_missing =
            report.resumed && self.store.list_ids(OBJECTIVES).await?.is_empty();
        if report.team_id.is_some() || objective_missing {
            let objective = self
                .objectives
                .create_objective(ObjectiveInput {
                    title: Some(DEMO_OBJECTIVE_TITLE.to_string()),
                    description: Some(DEMO_OBJECTIVE_DESCRIPTION.to_string()),
                    category: Some(DEMO_OBJECTIVE_CATEGORY.to_string()),
                    rewards: Some(Rewards::default()),
                })
                .await?;
            report.objective_id = Some(objective.objective_id);
        }

        self.store
            .put(META, SEED_SENTINEL, &SeedClaim::new(SeedState::Done))
            .await?;

        log::info!(
            "Sample data initialized ({} users, team: {}, objective: {})",
            report.users_created,
            report.team_id.as_deref().unwrap_or("none"),
            report.objective_id.as_deref().unwrap_or("none")
        );

        Ok(report)
    }
}
