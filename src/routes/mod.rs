use actix_web::web;

use crate::handlers::{health, shared};

pub mod objectives;
pub mod teams;
pub mod users;
pub mod wallet;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(shared::json_config())
        .app_data(shared::query_config())
        .service(health::hello)
        .service(health::health)
        .service(
            web::scope("/api")
                .configure(users::configure)
                .configure(teams::configure)
                .configure(objectives::configure)
                .configure(wallet::configure),
        );
}
