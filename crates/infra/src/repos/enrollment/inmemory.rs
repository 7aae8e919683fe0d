use super::IEnrollmentRepo;
use crate::repos::shared::inmemory_repo::*;
use lingora_domain::{Course, Enrollment, EnrollmentStatus, ID};
use std::sync::{Arc, Mutex};

pub struct InMemoryEnrollmentRepo {
    enrollments: Mutex<Vec<Enrollment>>,
    courses: Arc<Mutex<Vec<Course>>>,
}

impl InMemoryEnrollmentRepo {
    pub fn new(courses: Arc<Mutex<Vec<Course>>>) -> Self {
        Self {
            enrollments: Mutex::new(Vec::new()),
            courses,
        }
    }
}

#[async_trait::async_trait]
impl IEnrollmentRepo for InMemoryEnrollmentRepo {
    async fn insert(&self, enrollment: &Enrollment) -> anyhow::Result<()> {
        insert(enrollment, &self.enrollments);
        Ok(())
    }

    async fn find_by_user_and_course(&self, user_id: &ID, course_id: &ID) -> Option<Enrollment> {
        find_by(&self.enrollments, |e| {
            &e.user_id == user_id
                && &e.course_id == course_id
                && e.status != EnrollmentStatus::Cancelled
        })
        .into_iter()
        .next()
    }

    async fn find_by_user_with_courses(&self, user_id: &ID) -> Vec<(Enrollment, Course)> {
        let mut enrollments = find_by(&self.enrollments, |e| {
            &e.user_id == user_id && e.status != EnrollmentStatus::Cancelled
        });
        enrollments.sort_by(|a, b| b.created.cmp(&a.created));

        let courses = self.courses.lock().unwrap();
        enrollments
            .into_iter()
            .filter_map(|e| {
                courses
                    .iter()
                    .find(|c| c.id == e.course_id)
                    .cloned()
                    .map(|c| (e, c))
            })
            .collect()
    }
}
