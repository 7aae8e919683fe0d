mod inmemory;
mod postgres;

use lingora_domain::{Course, ID};

pub use inmemory::InMemoryCourseRepo;
pub use postgres::PostgresCourseRepo;

#[async_trait::async_trait]
pub trait ICourseRepo: Send + Sync {
    async fn insert(&self, course: &Course) -> anyhow::Result<()>;
    async fn save(&self, course: &Course) -> anyhow::Result<()>;
    async fn find(&self, course_id: &ID) -> Option<Course>;
    /// Published courses ordered by creation time, oldest first
    async fn find_published(&self, skip: i64, limit: i64) -> Vec<Course>;
    async fn count_published(&self) -> anyhow::Result<i64>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use chrono::Utc;
    use lingora_domain::{Course, CourseStatus};

    #[tokio::test]
    async fn lists_published_courses_with_pagination() {
        let ctx = setup_context_inmemory();
        for i in 0..5 {
            let course = Course::new(format!("Spanish {}", i), "es".into(), Utc::now());
            ctx.repos
                .courses
                .insert(&course)
                .await
                .expect("To insert course");
        }
        let mut draft = Course::new("Hidden".into(), "es".into(), Utc::now());
        draft.status = CourseStatus::Draft;
        ctx.repos
            .courses
            .insert(&draft)
            .await
            .expect("To insert course");

        assert_eq!(ctx.repos.courses.count_published().await.unwrap(), 5);
        let page = ctx.repos.courses.find_published(3, 10).await;
        assert_eq!(page.len(), 2);
        let page = ctx.repos.courses.find_published(0, 2).await;
        assert_eq!(page.len(), 2);
    }
}
