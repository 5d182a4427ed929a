use actix_web::web;

use crate::handlers::home::home;

mod profile;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(profile::config_routes)
            .configure(system::config_routes)
    );
}
