mod get_course;
mod get_teacher_timeslots;
mod join_course;
mod list_course_teachers;
mod list_courses;
mod list_joined_courses;

use actix_web::web;
use get_course::get_course_controller;
use get_teacher_timeslots::get_teacher_timeslots_controller;
use join_course::join_course_controller;
use list_course_teachers::list_course_teachers_controller;
use list_courses::list_courses_controller;
use list_joined_courses::list_joined_courses_controller;

pub use list_courses::sanitize_page_params;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/courses", web::get().to(list_courses_controller));
    cfg.route("/courses/{course_id}", web::get().to(get_course_controller));
    cfg.route(
        "/courses/{course_id}/teachers",
        web::get().to(list_course_teachers_controller),
    );
    cfg.route(
        "/courses/{course_id}/join",
        web::post().to(join_course_controller),
    );
    cfg.route(
        "/teachers/{teacher_id}/timeslots",
        web::get().to(get_teacher_timeslots_controller),
    );
    cfg.route("/me/courses", web::get().to(list_joined_courses_controller));
}
