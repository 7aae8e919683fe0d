use super::ITeacherRepo;
use chrono::{DateTime, NaiveTime, Utc};
use lingora_domain::{AvailabilitySlot, Teacher, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresTeacherRepo {
    pool: PgPool,
}

impl PostgresTeacherRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeacherRaw {
    teacher_uid: Uuid,
    name: String,
    introduction: String,
    detail: String,
    first_language: String,
    nationality: String,
    living_country: String,
    phone: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<TeacherRaw> for Teacher {
    fn from(raw: TeacherRaw) -> Self {
        Self {
            id: raw.teacher_uid.into(),
            name: raw.name,
            introduction: raw.introduction,
            detail: raw.detail,
            first_language: raw.first_language,
            nationality: raw.nationality,
            living_country: raw.living_country,
            phone: raw.phone,
            created: raw.created,
            updated: raw.updated,
        }
    }
}

#[derive(Debug, FromRow)]
struct AvailabilitySlotRaw {
    slot_uid: Uuid,
    teacher_uid: Uuid,
    weekday: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    enabled: bool,
    updated: DateTime<Utc>,
}

impl From<AvailabilitySlotRaw> for AvailabilitySlot {
    fn from(raw: AvailabilitySlotRaw) -> Self {
        Self {
            id: raw.slot_uid.into(),
            teacher_id: raw.teacher_uid.into(),
            weekday: raw.weekday as u32,
            start_time: raw.start_time,
            end_time: raw.end_time,
            enabled: raw.enabled,
            updated: raw.updated,
        }
    }
}

#[async_trait::async_trait]
impl ITeacherRepo for PostgresTeacherRepo {
    async fn insert(&self, teacher: &Teacher) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO teachers(teacher_uid, name, introduction, detail, first_language, nationality, living_country, phone, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(teacher.id.inner_ref())
        .bind(&teacher.name)
        .bind(&teacher.introduction)
        .bind(&teacher.detail)
        .bind(&teacher.first_language)
        .bind(&teacher.nationality)
        .bind(&teacher.living_country)
        .bind(&teacher.phone)
        .bind(teacher.created)
        .bind(teacher.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, teacher_id: &ID) -> Option<Teacher> {
        sqlx::query_as::<_, TeacherRaw>(
            r#"
            SELECT * FROM teachers
            WHERE teacher_uid = $1
            "#,
        )
        .bind(teacher_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|t| t.into())
    }

    async fn add_to_course(&self, teacher_id: &ID, course_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO course_teachers(course_uid, teacher_uid)
            VALUES($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(course_id.inner_ref())
        .bind(teacher_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_course(&self, course_id: &ID) -> Vec<Teacher> {
        sqlx::query_as::<_, TeacherRaw>(
            r#"
            SELECT t.* FROM teachers AS t
            INNER JOIN course_teachers AS ct
                ON ct.teacher_uid = t.teacher_uid
            WHERE ct.course_uid = $1
            "#,
        )
        .bind(course_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.into())
        .collect()
    }

    async fn insert_availability(&self, slot: &AvailabilitySlot) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO teacher_availability(slot_uid, teacher_uid, weekday, start_time, end_time, enabled, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(slot.id.inner_ref())
        .bind(slot.teacher_id.inner_ref())
        .bind(slot.weekday as i32)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.enabled)
        .bind(slot.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_availability(&self, teacher_id: &ID) -> Vec<AvailabilitySlot> {
        sqlx::query_as::<_, AvailabilitySlotRaw>(
            r#"
            SELECT * FROM teacher_availability
            WHERE teacher_uid = $1 AND enabled
            ORDER BY weekday ASC, start_time ASC
            "#,
        )
        .bind(teacher_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.into())
        .collect()
    }
}
