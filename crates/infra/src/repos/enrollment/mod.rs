mod inmemory;
mod postgres;

use lingora_domain::{Course, Enrollment, ID};

pub use inmemory::InMemoryEnrollmentRepo;
pub use postgres::PostgresEnrollmentRepo;

#[async_trait::async_trait]
pub trait IEnrollmentRepo: Send + Sync {
    async fn insert(&self, enrollment: &Enrollment) -> anyhow::Result<()>;
    async fn find_by_user_and_course(&self, user_id: &ID, course_id: &ID) -> Option<Enrollment>;
    /// Joined with course data, newest enrollment first
    async fn find_by_user_with_courses(&self, user_id: &ID) -> Vec<(Enrollment, Course)>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use chrono::{Duration, Utc};
    use lingora_domain::{Course, Enrollment, ID};

    #[tokio::test]
    async fn finds_enrollments_with_course_data_newest_first() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        let older = Course::new("Spanish".into(), "es".into(), Utc::now());
        let newer = Course::new("French".into(), "fr".into(), Utc::now());
        ctx.repos.courses.insert(&older).await.unwrap();
        ctx.repos.courses.insert(&newer).await.unwrap();

        let first = Enrollment::new(user_id.clone(), older.id.clone(), Utc::now());
        let second = Enrollment::new(
            user_id.clone(),
            newer.id.clone(),
            Utc::now() + Duration::seconds(10),
        );
        ctx.repos.enrollments.insert(&first).await.unwrap();
        ctx.repos.enrollments.insert(&second).await.unwrap();

        let found = ctx
            .repos
            .enrollments
            .find_by_user_and_course(&user_id, &older.id)
            .await;
        assert!(found.is_some());
        assert!(ctx
            .repos
            .enrollments
            .find_by_user_and_course(&user_id, &ID::new())
            .await
            .is_none());

        let joined = ctx.repos.enrollments.find_by_user_with_courses(&user_id).await;
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].1.name, "French");
        assert_eq!(joined[1].1.name, "Spanish");
    }
}
