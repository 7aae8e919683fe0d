use super::ICourseRepo;
use chrono::{DateTime, Utc};
use lingora_domain::{Course, CourseStatus, ID};
use rust_decimal::Decimal;
use sqlx::{types::Uuid, FromRow, PgPool, Row};

pub struct PostgresCourseRepo {
    pool: PgPool,
}

impl PostgresCourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CourseRaw {
    course_uid: Uuid,
    name: String,
    introduction: String,
    detail: String,
    language: String,
    level: i32,
    cost_price: Decimal,
    display_price: Decimal,
    goal: String,
    duration: i32,
    session_number: i32,
    status: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<CourseRaw> for Course {
    fn from(raw: CourseRaw) -> Self {
        Self {
            id: raw.course_uid.into(),
            name: raw.name,
            introduction: raw.introduction,
            detail: raw.detail,
            language: raw.language,
            level: raw.level,
            cost_price: raw.cost_price,
            display_price: raw.display_price,
            goal: raw.goal,
            duration: raw.duration,
            session_number: raw.session_number,
            status: raw.status.parse().unwrap_or(CourseStatus::Draft),
            created: raw.created,
            updated: raw.updated,
        }
    }
}

#[async_trait::async_trait]
impl ICourseRepo for PostgresCourseRepo {
    async fn insert(&self, course: &Course) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO courses(course_uid, name, introduction, detail, language, level, cost_price, display_price, goal, duration, session_number, status, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(course.id.inner_ref())
        .bind(&course.name)
        .bind(&course.introduction)
        .bind(&course.detail)
        .bind(&course.language)
        .bind(course.level)
        .bind(course.cost_price)
        .bind(course.display_price)
        .bind(&course.goal)
        .bind(course.duration)
        .bind(course.session_number)
        .bind(course.status.as_str())
        .bind(course.created)
        .bind(course.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, course: &Course) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE courses
            SET name = $2,
            introduction = $3,
            detail = $4,
            language = $5,
            level = $6,
            cost_price = $7,
            display_price = $8,
            goal = $9,
            duration = $10,
            session_number = $11,
            status = $12,
            updated = $13
            WHERE course_uid = $1
            "#,
        )
        .bind(course.id.inner_ref())
        .bind(&course.name)
        .bind(&course.introduction)
        .bind(&course.detail)
        .bind(&course.language)
        .bind(course.level)
        .bind(course.cost_price)
        .bind(course.display_price)
        .bind(&course.goal)
        .bind(course.duration)
        .bind(course.session_number)
        .bind(course.status.as_str())
        .bind(course.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, course_id: &ID) -> Option<Course> {
        sqlx::query_as::<_, CourseRaw>(
            r#"
            SELECT * FROM courses
            WHERE course_uid = $1
            "#,
        )
        .bind(course_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|c| c.into())
    }

    async fn find_published(&self, skip: i64, limit: i64) -> Vec<Course> {
        sqlx::query_as::<_, CourseRaw>(
            r#"
            SELECT * FROM courses
            WHERE status = 'published'
            ORDER BY created ASC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.into())
        .collect()
    }

    async fn count_published(&self) -> anyhow::Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total FROM courses
            WHERE status = 'published'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("total")?)
    }
}
