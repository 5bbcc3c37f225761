use actix_web::web;

use crate::handlers::teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .route("", web::get().to(teams::get_teams))
            .route("/{id}", web::get().to(teams::get_team))
            .route("/{id}/follow", web::post().to(teams::follow_team))
            .route("/{id}/follow", web::delete().to(teams::unfollow_team))
            .route("/{id}/tip", web::post().to(teams::tip_team)),
    );
}
