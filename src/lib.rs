pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use database::DocumentStore;
pub use database::repositories::{ObjectiveRepository, TeamRepository, UserRepository};
pub use services::{FollowService, SeedService, WalletService};

pub struct AppState {
    pub config: Config,
    pub users: UserRepository,
    pub teams: TeamRepository,
    pub objectives: ObjectiveRepository,
    pub follows: FollowService,
    pub wallet: WalletService,
}

impl AppState {
    pub fn new(store: DocumentStore, config: Config) -> Self {
        let users = UserRepository::new(store.clone());
        let teams = TeamRepository::new(store.clone());
        let objectives = ObjectiveRepository::new(store);

        Self {
            config,
            follows: FollowService::new(users.clone()),
            wallet: WalletService::new(users.clone(), teams.clone()),
            users,
            teams,
            objectives,
        }
    }
}
