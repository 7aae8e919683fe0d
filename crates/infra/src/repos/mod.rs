mod booking;
mod country;
mod course;
mod enrollment;
mod member;
mod shared;
mod teacher;
mod user;

pub use booking::IBookingRepo;

use booking::{InMemoryBookingRepo, PostgresBookingRepo};
use country::{ICountryRepo, InMemoryCountryRepo, PostgresCountryRepo};
use course::{ICourseRepo, InMemoryCourseRepo, PostgresCourseRepo};
use enrollment::{IEnrollmentRepo, InMemoryEnrollmentRepo, PostgresEnrollmentRepo};
use member::{IMemberRepo, InMemoryMemberRepo, PostgresMemberRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::{Arc, Mutex};
use teacher::{ITeacherRepo, InMemoryTeacherRepo, PostgresTeacherRepo};
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub members: Arc<dyn IMemberRepo>,
    pub courses: Arc<dyn ICourseRepo>,
    pub teachers: Arc<dyn ITeacherRepo>,
    pub enrollments: Arc<dyn IEnrollmentRepo>,
    pub bookings: Arc<dyn IBookingRepo>,
    pub countries: Arc<dyn ICountryRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            members: Arc::new(PostgresMemberRepo::new(pool.clone())),
            courses: Arc::new(PostgresCourseRepo::new(pool.clone())),
            teachers: Arc::new(PostgresTeacherRepo::new(pool.clone())),
            enrollments: Arc::new(PostgresEnrollmentRepo::new(pool.clone())),
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            countries: Arc::new(PostgresCountryRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let course_storage = Arc::new(Mutex::new(Vec::new()));

        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            members: Arc::new(InMemoryMemberRepo::new()),
            courses: Arc::new(InMemoryCourseRepo::new(course_storage.clone())),
            teachers: Arc::new(InMemoryTeacherRepo::new()),
            enrollments: Arc::new(InMemoryEnrollmentRepo::new(course_storage)),
            bookings: Arc::new(InMemoryBookingRepo::new()),
            countries: Arc::new(InMemoryCountryRepo::new()),
        }
    }
}
