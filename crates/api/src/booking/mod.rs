mod confirm_booking;
mod get_bookings_in_range;
mod get_meeting_info;
mod list_bookings;

use actix_web::web;
use confirm_booking::confirm_booking_controller;
use get_bookings_in_range::get_bookings_in_range_controller;
use get_meeting_info::get_meeting_info_controller;
use list_bookings::list_bookings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(confirm_booking_controller));
    cfg.route("/me/bookings", web::get().to(list_bookings_controller));
    cfg.route(
        "/me/bookings/range",
        web::get().to(get_bookings_in_range_controller),
    );
    cfg.route(
        "/bookings/{booking_no}/meeting",
        web::get().to(get_meeting_info_controller),
    );
}
