mod get_profile;
mod login_user;
mod register_user;
mod update_profile;

use actix_web::web;
use get_profile::get_profile_controller;
use login_user::login_user_controller;
use register_user::register_user_controller;
use update_profile::update_profile_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register_user_controller));
    cfg.route("/login", web::post().to(login_user_controller));
    cfg.route("/me", web::get().to(get_profile_controller));
    cfg.route("/me", web::put().to(update_profile_controller));
}
