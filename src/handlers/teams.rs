use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::database::models::{Team, TeamWithFans};
use crate::error::AppError;
use crate::handlers::shared::{ActingUserQuery, SuccessResponse};

#[derive(Debug, Default, serde::Deserialize)]
pub struct TipRequest {
    #[serde(default)]
    pub amount: i64,
}

async fn with_fan_count(state: &AppState, team: Team) -> Result<TeamWithFans, AppError> {
    let fan_count = state.users.get_team_fan_count(&team.team_id).await?;
    Ok(TeamWithFans { team, fan_count })
}

async fn require_team(state: &AppState, team_id: &str) -> Result<Team, AppError> {
    state
        .teams
        .get_team(team_id)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))
}

pub async fn get_teams(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let teams = state.teams.get_all_teams().await?;

    let mut annotated = Vec::with_capacity(teams.len());
    for team in teams {
        annotated.push(with_fan_count(&state, team).await?);
    }

    Ok(HttpResponse::Ok().json(annotated))
}

pub async fn get_team(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let team = require_team(&state, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(with_fan_count(&state, team).await?))
}

pub async fn follow_team(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ActingUserQuery>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let user_id = query.resolve(&state.config.fan_user_id);
    require_team(&state, &team_id).await?;

    if !state.follows.follow_team(&user_id, &team_id).await? {
        return Err(AppError::not_found("User not found"));
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub async fn unfollow_team(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ActingUserQuery>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let user_id = query.resolve(&state.config.fan_user_id);
    require_team(&state, &team_id).await?;

    if !state.follows.unfollow_team(&user_id, &team_id).await? {
        return Err(AppError::not_found("User not found"));
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub async fn tip_team(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ActingUserQuery>,
    input: web::Json<TipRequest>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let user_id = query.resolve(&state.config.fan_user_id);
    let amount = input.amount;

    if amount <= 0 {
        return Err(AppError::bad_request("Invalid amount"));
    }

    let user = state.users.get_user(&user_id).await?;
    let team = state.teams.get_team(&team_id).await?;
    let (Some(user), Some(team)) = (user, team) else {
        return Err(AppError::not_found("User or Team not found"));
    };

    if user.wallet_balance < amount {
        return Err(AppError::bad_request("Insufficient balance"));
    }

    // The wallet service re-reads both documents; they may have changed since the check above.
    if !state.wallet.process_tip(&user_id, &team_id, amount).await? {
        return Err(AppError::not_found("User or Team not found"));
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::with_message(format!(
        "Tipped {} to {}",
        amount, team.name
    ))))
}
