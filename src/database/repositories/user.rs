use crate::database::{
    DocumentStore, StoreError,
    models::{USERS, User, UserRole},
};

#[derive(Clone)]
pub struct UserRepository {
    store: DocumentStore,
}

impl UserRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        self.store.get(USERS, user_id).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        self.store.get_all(USERS).await
    }

    /// Create a user with the starting balance. Email and username are not
    /// checked for uniqueness.
    pub async fn create_user(
        &self,
        user_id: &str,
        email: &str,
        username: &str,
        role: UserRole,
        password_hash: Option<String>,
    ) -> Result<User, StoreError> {
        let user = User::new(user_id, email, username, role, password_hash);

        self.save(&user).await?;
        self.store.add_to_index(USERS, &user.user_id).await?;

        Ok(user)
    }

    pub async fn save(&self, user: &User) -> Result<(), StoreError> {
        self.store.put(USERS, &user.user_id, user).await
    }

    /// Number of users following `team_id`. Scans every user.
    pub async fn get_team_fan_count(&self, team_id: &str) -> Result<usize, StoreError> {
        let users = self.get_all_users().await?;
        Ok(users.iter().filter(|user| user.is_following(team_id)).count())
    }
}
