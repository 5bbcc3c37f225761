use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::database::models::ObjectiveInput;
use crate::error::AppError;

pub async fn get_objectives(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let objectives = state.objectives.get_active_objectives().await?;
    Ok(HttpResponse::Ok().json(objectives))
}

// Open to every caller, there are no roles to check.
pub async fn create_objective(
    state: web::Data<AppState>,
    input: web::Json<ObjectiveInput>,
) -> Result<HttpResponse, AppError> {
    let objective = state
        .objectives
        .create_objective(input.into_inner())
        .await?;

    log::info!(
        "Objective {} created: {}",
        objective.objective_id,
        objective.title.as_deref().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(objective))
}
