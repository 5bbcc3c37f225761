use crate::database::{
    DocumentStore, StoreError,
    models::{TEAMS, Team},
};

#[derive(Clone)]
pub struct TeamRepository {
    store: DocumentStore,
}

impl TeamRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Option<Team>, StoreError> {
        self.store.get(TEAMS, team_id).await
    }

    pub async fn get_all_teams(&self) -> Result<Vec<Team>, StoreError> {
        self.store.get_all(TEAMS).await
    }

    pub async fn create_team(&self, name: &str, description: &str) -> Result<Team, StoreError> {
        let team = Team::new(name, description);

        self.save(&team).await?;
        self.store.add_to_index(TEAMS, &team.team_id).await?;

        Ok(team)
    }

    pub async fn save(&self, team: &Team) -> Result<(), StoreError> {
        self.store.put(TEAMS, &team.team_id, team).await
    }
}
