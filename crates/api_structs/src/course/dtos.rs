use chrono::{DateTime, NaiveTime, Utc};
use lingora_domain::{
    AvailabilitySlot, Course, CourseStatus, Enrollment, EnrollmentStatus, Teacher, ID,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDTO {
    pub id: ID,
    pub name: String,
    pub introduction: String,
    pub detail: String,
    pub language: String,
    pub level: i32,
    pub cost_price: Decimal,
    pub display_price: Decimal,
    pub goal: String,
    pub duration: i32,
    pub session_number: i32,
    pub status: CourseStatus,
}

impl CourseDTO {
    pub fn new(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            introduction: course.introduction,
            detail: course.detail,
            language: course.language,
            level: course.level,
            cost_price: course.cost_price,
            display_price: course.display_price,
            goal: course.goal,
            duration: course.duration,
            session_number: course.session_number,
            status: course.status,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDTO {
    pub id: ID,
    pub name: String,
    pub introduction: String,
    pub detail: String,
    pub first_language: String,
    pub nationality: String,
    pub living_country: String,
}

impl TeacherDTO {
    pub fn new(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            introduction: teacher.introduction,
            detail: teacher.detail,
            first_language: teacher.first_language,
            nationality: teacher.nationality,
            living_country: teacher.living_country,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlotDTO {
    pub weekday: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl AvailabilitySlotDTO {
    pub fn new(slot: AvailabilitySlot) -> Self {
        Self {
            weekday: slot.weekday,
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDTO {
    pub id: ID,
    pub user_id: ID,
    pub course_id: ID,
    pub status: EnrollmentStatus,
    pub created: DateTime<Utc>,
}

impl EnrollmentDTO {
    pub fn new(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            status: enrollment.status,
            created: enrollment.created,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourseDTO {
    pub enrollment: EnrollmentDTO,
    pub course: CourseDTO,
}

impl EnrolledCourseDTO {
    pub fn new(enrollment: Enrollment, course: Course) -> Self {
        Self {
            enrollment: EnrollmentDTO::new(enrollment),
            course: CourseDTO::new(course),
        }
    }
}
