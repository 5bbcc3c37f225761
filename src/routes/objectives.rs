use actix_web::web;

use crate::handlers::objectives;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/objectives")
            .route("", web::get().to(objectives::get_objectives))
            .route("", web::post().to(objectives::create_objective)),
    );
}
