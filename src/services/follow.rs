use crate::database::{StoreError, repositories::UserRepository};

/// Follow list maintenance. Team existence is not checked here; callers that
/// need it look the team up first.
#[derive(Clone)]
pub struct FollowService {
    users: UserRepository,
}

impl FollowService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Add `team_id` to the user's follow list. Returns `false` when the user
    /// does not exist. Following twice is a no-op and skips the write.
    pub async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<bool, StoreError> {
        let Some(mut user) = self.users.get_user(user_id).await? else {
            return Ok(false);
        };

        if !user.is_following(team_id) {
            user.following_teams.push(team_id.to_string());
            self.users.save(&user).await?;
            log::info!("User {} now follows team {}", user_id, team_id);
        }

        Ok(true)
    }

    /// Drop `team_id` from the user's follow list. Returns `false` when the
    /// user does not exist. The user document is written even if the team
    /// was not followed.
    pub async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<bool, StoreError> {
        let Some(mut user) = self.users.get_user(user_id).await? else {
            return Ok(false);
        };

        user.following_teams.retain(|id| id != team_id);
        self.users.save(&user).await?;
        log::info!("User {} unfollowed team {}", user_id, team_id);

        Ok(true)
    }
}
