use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::confirm_booking::*;
use lingora_api_structs::dtos::TimeSlotParams;
use lingora_domain::scheduling::{
    check_conflicts, expand_dates, match_slots, materialize, parse_time, ConflictScope,
    SchedulingError, TimeSlotSpec,
};
use lingora_domain::{Booking, BookingNumber, ID};
use lingora_infra::LingoraContext;

pub async fn confirm_booking_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = ConfirmBookingUseCase {
        user_id: user.id,
        course_id: body.course_id,
        teacher_id: body.teacher_id,
        start_date: body.start_date,
        end_date: body.end_date,
        time_slots: body.time_slots,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.booking_no, res.bookings)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ConfirmBookingUseCase {
    pub user_id: ID,
    pub course_id: ID,
    pub teacher_id: ID,
    pub start_date: String,
    pub end_date: String,
    pub time_slots: Vec<TimeSlotParams>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub booking_no: BookingNumber,
    pub bookings: Vec<Booking>,
}

#[derive(Debug)]
pub enum UseCaseError {
    CourseNotFound(ID),
    TeacherNotFound(ID),
    InvalidTimeSlot(String),
    WindowTooLarge(i64),
    Scheduling(SchedulingError),
    StorageError,
}

impl From<SchedulingError> for UseCaseError {
    fn from(e: SchedulingError) -> Self {
        Self::Scheduling(e)
    }
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CourseNotFound(id) => {
                Self::NotFound(format!("The course with id: {} was not found", id))
            }
            UseCaseError::TeacherNotFound(id) => {
                Self::NotFound(format!("The teacher with id: {} was not found", id))
            }
            UseCaseError::InvalidTimeSlot(slot) => {
                Self::BadClientData(format!("Invalid time slot: {}", slot))
            }
            UseCaseError::WindowTooLarge(max_days) => Self::BadClientData(format!(
                "The requested date range is too long, the limit is {} days",
                max_days
            )),
            UseCaseError::Scheduling(e) => match e {
                SchedulingError::Conflict { .. } => Self::Conflict(e.to_string()),
                _ => Self::BadClientData(e.to_string()),
            },
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ConfirmBookingUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "ConfirmBooking";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.courses.find(&self.course_id).await.is_none() {
            return Err(UseCaseError::CourseNotFound(self.course_id.clone()));
        }
        if ctx.repos.teachers.find(&self.teacher_id).await.is_none() {
            return Err(UseCaseError::TeacherNotFound(self.teacher_id.clone()));
        }

        let mut slots = Vec::with_capacity(self.time_slots.len());
        for slot in &self.time_slots {
            let spec = TimeSlotSpec {
                weekday: slot.week_day,
                start_time: parse_time(&slot.start_time)
                    .map_err(|_| UseCaseError::InvalidTimeSlot(slot.start_time.clone()))?,
                end_time: parse_time(&slot.end_time)
                    .map_err(|_| UseCaseError::InvalidTimeSlot(slot.end_time.clone()))?,
            };
            if !(1..=7).contains(&spec.weekday) || spec.start_time >= spec.end_time {
                return Err(UseCaseError::InvalidTimeSlot(format!(
                    "weekday {} {} - {}",
                    slot.week_day, slot.start_time, slot.end_time
                )));
            }
            slots.push(spec);
        }

        let dates = expand_dates(&self.start_date, &self.end_date)?;
        if dates.len() as i64 > ctx.config.booking_window_max_days {
            return Err(UseCaseError::WindowTooLarge(
                ctx.config.booking_window_max_days,
            ));
        }

        let candidates = match_slots(&dates, &slots)?;

        let conflict_course = match ctx.config.booking_conflict_scope {
            ConflictScope::PerCourse => Some(&self.course_id),
            ConflictScope::PerTeacher => None,
        };
        let lesson_dates: Vec<_> = candidates.iter().map(|c| c.lesson_date).collect();
        // A failed calendar read must abort the request, otherwise a booked
        // teacher would look free and the batch would double-book.
        let existing: Vec<_> = ctx
            .repos
            .bookings
            .find_on_dates(&self.teacher_id, conflict_course, &lesson_dates)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .iter()
            .map(|b| b.into())
            .collect();

        check_conflicts(&candidates, &existing)?;

        let (booking_no, bookings) = materialize(
            candidates,
            &self.course_id,
            &self.teacher_id,
            &self.user_id,
            ctx.sys.now(),
        );
        ctx.repos
            .bookings
            .insert_batch(&bookings)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            booking_no,
            bookings,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_domain::{BookingStatus, Course, Teacher};
    use lingora_infra::{setup_context_inmemory, IBookingRepo};

    struct TestContext {
        ctx: LingoraContext,
        course: Course,
        teacher: Teacher,
        user_id: ID,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context_inmemory();
        let course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        ctx.repos.courses.insert(&course).await.unwrap();
        let teacher = Teacher::new("Li Wei".into(), "zh".into(), Utc::now());
        ctx.repos.teachers.insert(&teacher).await.unwrap();

        TestContext {
            ctx,
            course,
            teacher,
            user_id: ID::new(),
        }
    }

    fn usecase(t: &TestContext) -> ConfirmBookingUseCase {
        ConfirmBookingUseCase {
            user_id: t.user_id.clone(),
            course_id: t.course.id.clone(),
            teacher_id: t.teacher.id.clone(),
            // 2025-03-03 is a Monday
            start_date: "2025-03-03".into(),
            end_date: "2025-03-16".into(),
            time_slots: vec![TimeSlotParams {
                week_day: 1,
                start_time: "09:00".into(),
                end_time: "10:00".into(),
            }],
        }
    }

    #[actix_web::test]
    async fn confirms_a_weekly_booking_batch() {
        let t = setup().await;
        let res = usecase(&t).execute(&t.ctx).await.unwrap();

        assert_eq!(res.bookings.len(), 2);
        assert_eq!(res.booking_no.as_str().len(), 12);
        for booking in &res.bookings {
            assert_eq!(booking.booking_no, res.booking_no);
            assert_eq!(booking.status, BookingStatus::Pending);
            assert_eq!(booking.user_id, t.user_id);
        }
        assert_eq!(
            res.bookings[0].lesson_date.to_string(),
            "2025-03-03".to_string()
        );
        assert_eq!(
            res.bookings[1].lesson_date.to_string(),
            "2025-03-10".to_string()
        );

        let stored = t
            .ctx
            .repos
            .bookings
            .find_by_booking_no(&t.user_id, res.booking_no.as_str())
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
    }

    struct DownBookingRepo;

    #[async_trait::async_trait]
    impl IBookingRepo for DownBookingRepo {
        async fn insert_batch(&self, _bookings: &[Booking]) -> anyhow::Result<()> {
            Ok(())
        }

        async fn find_on_dates(
            &self,
            _teacher_id: &ID,
            _course_id: Option<&ID>,
            _dates: &[chrono::NaiveDate],
        ) -> anyhow::Result<Vec<Booking>> {
            Err(anyhow::anyhow!("connection reset"))
        }

        async fn find_by_user(
            &self,
            _user_id: &ID,
            _skip: i64,
            _limit: i64,
        ) -> anyhow::Result<Vec<Booking>> {
            Err(anyhow::anyhow!("connection reset"))
        }

        async fn count_by_user(&self, _user_id: &ID) -> anyhow::Result<i64> {
            Err(anyhow::anyhow!("connection reset"))
        }

        async fn find_by_user_in_range(
            &self,
            _user_id: &ID,
            _start: chrono::NaiveDate,
            _end: chrono::NaiveDate,
        ) -> anyhow::Result<Vec<Booking>> {
            Err(anyhow::anyhow!("connection reset"))
        }

        async fn find_by_booking_no(
            &self,
            _user_id: &ID,
            _booking_no: &str,
        ) -> anyhow::Result<Vec<Booking>> {
            Err(anyhow::anyhow!("connection reset"))
        }
    }

    #[actix_web::test]
    async fn failed_calendar_read_aborts_instead_of_booking_blind() {
        let mut t = setup().await;
        t.ctx.repos.bookings = std::sync::Arc::new(DownBookingRepo);

        assert!(matches!(
            usecase(&t).execute(&t.ctx).await,
            Err(UseCaseError::StorageError)
        ));
    }

    #[actix_web::test]
    async fn rejects_overlapping_request() {
        let t = setup().await;
        usecase(&t).execute(&t.ctx).await.unwrap();

        let mut overlapping = usecase(&t);
        overlapping.time_slots[0].start_time = "09:30".into();
        overlapping.time_slots[0].end_time = "10:30".into();
        assert!(matches!(
            overlapping.execute(&t.ctx).await,
            Err(UseCaseError::Scheduling(SchedulingError::Conflict { .. }))
        ));
    }

    #[actix_web::test]
    async fn back_to_back_bookings_are_allowed() {
        let t = setup().await;
        usecase(&t).execute(&t.ctx).await.unwrap();

        let mut adjacent = usecase(&t);
        adjacent.time_slots[0].start_time = "10:00".into();
        adjacent.time_slots[0].end_time = "11:00".into();
        assert!(adjacent.execute(&t.ctx).await.is_ok());
    }

    #[actix_web::test]
    async fn per_course_scope_permits_cross_course_overlap() {
        let t = setup().await;
        usecase(&t).execute(&t.ctx).await.unwrap();

        let other_course = Course::new("Mandarin 102".into(), "zh".into(), Utc::now());
        t.ctx.repos.courses.insert(&other_course).await.unwrap();
        let mut other = usecase(&t);
        other.course_id = other_course.id;
        assert!(other.execute(&t.ctx).await.is_ok());
    }

    #[actix_web::test]
    async fn per_teacher_scope_blocks_cross_course_overlap() {
        let mut t = setup().await;
        t.ctx.config.booking_conflict_scope = ConflictScope::PerTeacher;
        usecase(&t).execute(&t.ctx).await.unwrap();

        let other_course = Course::new("Mandarin 102".into(), "zh".into(), Utc::now());
        t.ctx.repos.courses.insert(&other_course).await.unwrap();
        let mut other = usecase(&t);
        other.course_id = other_course.id;
        assert!(matches!(
            other.execute(&t.ctx).await,
            Err(UseCaseError::Scheduling(SchedulingError::Conflict { .. }))
        ));
    }

    #[actix_web::test]
    async fn rejects_bad_input() {
        let t = setup().await;

        let mut bad_date = usecase(&t);
        bad_date.start_date = "03/03/2025".into();
        assert!(matches!(
            bad_date.execute(&t.ctx).await,
            Err(UseCaseError::Scheduling(
                SchedulingError::InvalidDateFormat(_)
            ))
        ));

        let mut inverted = usecase(&t);
        inverted.start_date = "2025-03-16".into();
        inverted.end_date = "2025-03-03".into();
        assert!(matches!(
            inverted.execute(&t.ctx).await,
            Err(UseCaseError::Scheduling(SchedulingError::InvalidRange))
        ));

        let mut no_match = usecase(&t);
        // A Wednesday-only range with a Monday slot yields nothing
        no_match.start_date = "2025-03-05".into();
        no_match.end_date = "2025-03-05".into();
        assert!(matches!(
            no_match.execute(&t.ctx).await,
            Err(UseCaseError::Scheduling(SchedulingError::EmptyBookingSet))
        ));

        let mut bad_slot = usecase(&t);
        bad_slot.time_slots[0].week_day = 0;
        assert!(matches!(
            bad_slot.execute(&t.ctx).await,
            Err(UseCaseError::InvalidTimeSlot(_))
        ));

        let mut too_long = usecase(&t);
        too_long.end_date = "2027-03-03".into();
        assert!(matches!(
            too_long.execute(&t.ctx).await,
            Err(UseCaseError::WindowTooLarge(_))
        ));

        let mut unknown_course = usecase(&t);
        unknown_course.course_id = ID::new();
        assert!(matches!(
            unknown_course.execute(&t.ctx).await,
            Err(UseCaseError::CourseNotFound(_))
        ));
    }
}
