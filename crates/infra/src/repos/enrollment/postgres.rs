use super::IEnrollmentRepo;
use chrono::{DateTime, Utc};
use lingora_domain::{Course, CourseStatus, Enrollment, EnrollmentStatus, ID};
use rust_decimal::Decimal;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEnrollmentRepo {
    pool: PgPool,
}

impl PostgresEnrollmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EnrollmentRaw {
    enrollment_uid: Uuid,
    user_uid: Uuid,
    course_uid: Uuid,
    status: String,
    created: DateTime<Utc>,
}

impl From<EnrollmentRaw> for Enrollment {
    fn from(raw: EnrollmentRaw) -> Self {
        Self {
            id: raw.enrollment_uid.into(),
            user_id: raw.user_uid.into(),
            course_id: raw.course_uid.into(),
            status: raw.status.parse().unwrap_or(EnrollmentStatus::Applied),
            created: raw.created,
        }
    }
}

/// Enrollment columns joined with the aliased course columns
#[derive(Debug, FromRow)]
struct EnrolledCourseRaw {
    enrollment_uid: Uuid,
    user_uid: Uuid,
    course_uid: Uuid,
    status: String,
    created: DateTime<Utc>,
    course_name: String,
    course_introduction: String,
    course_detail: String,
    course_language: String,
    course_level: i32,
    course_cost_price: Decimal,
    course_display_price: Decimal,
    course_goal: String,
    course_duration: i32,
    course_session_number: i32,
    course_status: String,
    course_created: DateTime<Utc>,
    course_updated: DateTime<Utc>,
}

impl From<EnrolledCourseRaw> for (Enrollment, Course) {
    fn from(raw: EnrolledCourseRaw) -> Self {
        (
            Enrollment {
                id: raw.enrollment_uid.into(),
                user_id: raw.user_uid.into(),
                course_id: raw.course_uid.into(),
                status: raw.status.parse().unwrap_or(EnrollmentStatus::Applied),
                created: raw.created,
            },
            Course {
                id: raw.course_uid.into(),
                name: raw.course_name,
                introduction: raw.course_introduction,
                detail: raw.course_detail,
                language: raw.course_language,
                level: raw.course_level,
                cost_price: raw.course_cost_price,
                display_price: raw.course_display_price,
                goal: raw.course_goal,
                duration: raw.course_duration,
                session_number: raw.course_session_number,
                status: raw.course_status.parse().unwrap_or(CourseStatus::Draft),
                created: raw.course_created,
                updated: raw.course_updated,
            },
        )
    }
}

#[async_trait::async_trait]
impl IEnrollmentRepo for PostgresEnrollmentRepo {
    async fn insert(&self, enrollment: &Enrollment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO enrollments(enrollment_uid, user_uid, course_uid, status, created)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(enrollment.id.inner_ref())
        .bind(enrollment.user_id.inner_ref())
        .bind(enrollment.course_id.inner_ref())
        .bind(enrollment.status.as_str())
        .bind(enrollment.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user_and_course(&self, user_id: &ID, course_id: &ID) -> Option<Enrollment> {
        sqlx::query_as::<_, EnrollmentRaw>(
            r#"
            SELECT * FROM enrollments
            WHERE user_uid = $1 AND course_uid = $2 AND status != 'cancelled'
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(course_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|e| e.into())
    }

    async fn find_by_user_with_courses(&self, user_id: &ID) -> Vec<(Enrollment, Course)> {
        sqlx::query_as::<_, EnrolledCourseRaw>(
            r#"
            SELECT e.enrollment_uid, e.user_uid, e.course_uid, e.status, e.created,
                c.name AS course_name,
                c.introduction AS course_introduction,
                c.detail AS course_detail,
                c.language AS course_language,
                c.level AS course_level,
                c.cost_price AS course_cost_price,
                c.display_price AS course_display_price,
                c.goal AS course_goal,
                c.duration AS course_duration,
                c.session_number AS course_session_number,
                c.status AS course_status,
                c.created AS course_created,
                c.updated AS course_updated
            FROM enrollments AS e
            INNER JOIN courses AS c
                ON c.course_uid = e.course_uid
            WHERE e.user_uid = $1 AND e.status != 'cancelled'
            ORDER BY e.created DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into())
        .collect()
    }
}
