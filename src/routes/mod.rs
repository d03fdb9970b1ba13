// Route exports
pub mod emails;
pub mod webhook;

pub use webhook::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(webhook::configure)
            .configure(emails::configure),
    );
}
