use super::ICourseRepo;
use crate::repos::shared::inmemory_repo::*;
use lingora_domain::{Course, CourseStatus, ID};
use std::sync::{Arc, Mutex};

pub struct InMemoryCourseRepo {
    // Shared with the enrollment repo so it can join on course data
    courses: Arc<Mutex<Vec<Course>>>,
}

impl InMemoryCourseRepo {
    pub fn new(courses: Arc<Mutex<Vec<Course>>>) -> Self {
        Self { courses }
    }
}

#[async_trait::async_trait]
impl ICourseRepo for InMemoryCourseRepo {
    async fn insert(&self, course: &Course) -> anyhow::Result<()> {
        insert(course, &self.courses);
        Ok(())
    }

    async fn save(&self, course: &Course) -> anyhow::Result<()> {
        save(course, &self.courses);
        Ok(())
    }

    async fn find(&self, course_id: &ID) -> Option<Course> {
        find(course_id, &self.courses)
    }

    async fn find_published(&self, skip: i64, limit: i64) -> Vec<Course> {
        let mut published = find_by(&self.courses, |c| c.status == CourseStatus::Published);
        published.sort_by_key(|c| c.created);
        published
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect()
    }

    async fn count_published(&self) -> anyhow::Result<i64> {
        Ok(find_by(&self.courses, |c| c.status == CourseStatus::Published).len() as i64)
    }
}
