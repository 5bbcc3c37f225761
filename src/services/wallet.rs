use crate::database::{
    StoreError,
    repositories::{TeamRepository, UserRepository},
};

/// Moves wallet balance from users to team earnings.
#[derive(Clone)]
pub struct WalletService {
    users: UserRepository,
    teams: TeamRepository,
}

impl WalletService {
    pub fn new(users: UserRepository, teams: TeamRepository) -> Self {
        Self { users, teams }
    }

    pub async fn get_balance(&self, user_id: &str) -> Result<Option<i64>, StoreError> {
        Ok(self
            .users
            .get_user(user_id)
            .await?
            .map(|user| user.wallet_balance))
    }

    /// Debit the user and credit the team by `amount`. Returns `false` when
    /// either document is missing.
    ///
    /// Amount and balance checks belong to the caller. The debit and the
    /// credit are two separate writes: if the second fails the user has paid
    /// and the team has not been credited.
    pub async fn process_tip(
        &self,
        user_id: &str,
        team_id: &str,
        amount: i64,
    ) -> Result<bool, StoreError> {
        let user = self.users.get_user(user_id).await?;
        let team = self.teams.get_team(team_id).await?;

        let (Some(mut user), Some(mut team)) = (user, team) else {
            return Ok(false);
        };

        user.wallet_balance -= amount;
        self.users.save(&user).await?;

        team.metrics.total_earnings += amount;
        self.teams.save(&team).await?;

        log::info!(
            "User {} tipped {} to team {} (balance now {})",
            user_id,
            amount,
            team_id,
            user.wallet_balance
        );

        Ok(true)
    }
}
