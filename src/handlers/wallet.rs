use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ActingUserQuery;

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

pub async fn get_balance(
    state: web::Data<AppState>,
    query: web::Query<ActingUserQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = query.resolve(&state.config.fan_user_id);

    let balance = state
        .wallet
        .get_balance(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(BalanceResponse { balance }))
}
