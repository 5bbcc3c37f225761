use actix_web::web;

use crate::handlers::wallet;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/wallet").route("/balance", web::get().to(wallet::get_balance)));
}
