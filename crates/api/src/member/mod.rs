mod add_member;
mod list_members;
mod remove_member;

use actix_web::web;
use add_member::add_member_controller;
use list_members::list_members_controller;
use remove_member::remove_member_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/members", web::post().to(add_member_controller));
    cfg.route("/members", web::get().to(list_members_controller));
    cfg.route(
        "/members/{member_id}",
        web::delete().to(remove_member_controller),
    );
}
