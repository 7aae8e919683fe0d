mod list_countries;

use actix_web::web;
use list_countries::list_countries_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/countries", web::get().to(list_countries_controller));
}
