use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::database::models::UserResponse;
use crate::error::AppError;

pub async fn get_fan_user(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let user = state
        .users
        .get_user(&state.config.fan_user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Fan user not found"))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
