use lingora_domain::{AvailabilitySlot, Course, Enrollment, Teacher, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::{
    AvailabilitySlotDTO, CourseDTO, EnrolledCourseDTO, EnrollmentDTO, TeacherDTO,
};

pub mod list_courses {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        /// 1-based page number
        #[serde(default)]
        pub pn: Option<i64>,
        /// Page size
        #[serde(default)]
        pub ps: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub courses: Vec<CourseDTO>,
        pub pn: i64,
        pub ps: i64,
        pub total: i64,
        pub total_pages: i64,
    }

    impl APIResponse {
        pub fn new(courses: Vec<Course>, pn: i64, ps: i64, total: i64) -> Self {
            Self {
                courses: courses.into_iter().map(CourseDTO::new).collect(),
                pn,
                ps,
                total,
                total_pages: (total + ps - 1) / ps,
            }
        }
    }
}

pub mod get_course {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub course: CourseDTO,
    }

    impl APIResponse {
        pub fn new(course: Course) -> Self {
            Self {
                course: CourseDTO::new(course),
            }
        }
    }
}

pub mod list_course_teachers {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub teachers: Vec<TeacherDTO>,
    }

    impl APIResponse {
        pub fn new(teachers: Vec<Teacher>) -> Self {
            Self {
                teachers: teachers.into_iter().map(TeacherDTO::new).collect(),
            }
        }
    }
}

pub mod get_teacher_timeslots {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub teacher_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub timeslots: Vec<AvailabilitySlotDTO>,
    }

    impl APIResponse {
        pub fn new(slots: Vec<AvailabilitySlot>) -> Self {
            Self {
                timeslots: slots.into_iter().map(AvailabilitySlotDTO::new).collect(),
            }
        }
    }
}

pub mod join_course {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub course_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub enrollment: EnrollmentDTO,
    }

    impl APIResponse {
        pub fn new(enrollment: Enrollment) -> Self {
            Self {
                enrollment: EnrollmentDTO::new(enrollment),
            }
        }
    }
}

pub mod list_joined_courses {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub courses: Vec<EnrolledCourseDTO>,
    }

    impl APIResponse {
        pub fn new(enrollments: Vec<(Enrollment, Course)>) -> Self {
            Self {
                courses: enrollments
                    .into_iter()
                    .map(|(enrollment, course)| EnrolledCourseDTO::new(enrollment, course))
                    .collect(),
            }
        }
    }
}
