mod inmemory;
mod postgres;

use lingora_domain::{AvailabilitySlot, Teacher, ID};

pub use inmemory::InMemoryTeacherRepo;
pub use postgres::PostgresTeacherRepo;

#[async_trait::async_trait]
pub trait ITeacherRepo: Send + Sync {
    async fn insert(&self, teacher: &Teacher) -> anyhow::Result<()>;
    async fn find(&self, teacher_id: &ID) -> Option<Teacher>;
    async fn add_to_course(&self, teacher_id: &ID, course_id: &ID) -> anyhow::Result<()>;
    async fn find_by_course(&self, course_id: &ID) -> Vec<Teacher>;
    async fn insert_availability(&self, slot: &AvailabilitySlot) -> anyhow::Result<()>;
    /// Enabled slots only, ordered by weekday then start time
    async fn find_availability(&self, teacher_id: &ID) -> Vec<AvailabilitySlot>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use chrono::{NaiveTime, Utc};
    use lingora_domain::{AvailabilitySlot, Teacher, ID};

    #[tokio::test]
    async fn links_teachers_to_courses() {
        let ctx = setup_context_inmemory();
        let teacher = Teacher::new("Maria".into(), "es".into(), Utc::now());
        ctx.repos
            .teachers
            .insert(&teacher)
            .await
            .expect("To insert teacher");

        let course_id = ID::new();
        ctx.repos
            .teachers
            .add_to_course(&teacher.id, &course_id)
            .await
            .expect("To link teacher");

        let linked = ctx.repos.teachers.find_by_course(&course_id).await;
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, teacher.id);
        assert!(ctx.repos.teachers.find_by_course(&ID::new()).await.is_empty());
    }

    #[tokio::test]
    async fn availability_skips_disabled_slots_and_sorts() {
        let ctx = setup_context_inmemory();
        let teacher = Teacher::new("Maria".into(), "es".into(), Utc::now());
        ctx.repos
            .teachers
            .insert(&teacher)
            .await
            .expect("To insert teacher");

        let slot = |weekday: u32, hour: u32, enabled: bool| AvailabilitySlot {
            id: Default::default(),
            teacher_id: teacher.id.clone(),
            weekday,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            enabled,
            updated: Utc::now(),
        };
        for s in [slot(3, 9, true), slot(1, 14, true), slot(1, 9, true), slot(5, 9, false)] {
            ctx.repos
                .teachers
                .insert_availability(&s)
                .await
                .expect("To insert slot");
        }

        let slots = ctx.repos.teachers.find_availability(&teacher.id).await;
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].weekday, 1);
        assert_eq!(slots[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[1].weekday, 1);
        assert_eq!(slots[1].start_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(slots[2].weekday, 3);
    }
}
