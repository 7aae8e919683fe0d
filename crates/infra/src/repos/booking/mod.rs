mod inmemory;
mod postgres;

use chrono::NaiveDate;
use lingora_domain::{Booking, ID};

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    /// All bookings of one confirmation request are inserted atomically
    async fn insert_batch(&self, bookings: &[Booking]) -> anyhow::Result<()>;
    /// Bookings held by a teacher on any of the given dates. With a course id
    /// the lookup is restricted to that course, without it the whole teacher
    /// calendar is searched. A failed read is an error, never an empty
    /// calendar, since the result feeds conflict checking.
    async fn find_on_dates(
        &self,
        teacher_id: &ID,
        course_id: Option<&ID>,
        dates: &[NaiveDate],
    ) -> anyhow::Result<Vec<Booking>>;
    async fn find_by_user(
        &self,
        user_id: &ID,
        skip: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Booking>>;
    async fn count_by_user(&self, user_id: &ID) -> anyhow::Result<i64>;
    async fn find_by_user_in_range(
        &self,
        user_id: &ID,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Booking>>;
    async fn find_by_booking_no(&self, user_id: &ID, booking_no: &str)
        -> anyhow::Result<Vec<Booking>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use lingora_domain::{Booking, BookingNumber, BookingStatus, ID};

    fn booking(
        user_id: &ID,
        teacher_id: &ID,
        course_id: &ID,
        date: NaiveDate,
        start: &str,
        end: &str,
    ) -> Booking {
        let now = Utc::now();
        Booking {
            id: Default::default(),
            booking_no: BookingNumber::generate(date),
            teacher_id: teacher_id.clone(),
            course_id: course_id.clone(),
            user_id: user_id.clone(),
            lesson_date: date,
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            status: BookingStatus::Pending,
            created: now,
            updated: now,
        }
    }

    #[tokio::test]
    async fn finds_bookings_on_dates_scoped_by_course() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let teacher_id = ID::new();
        let course_a = ID::new();
        let course_b = ID::new();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

        ctx.repos
            .bookings
            .insert_batch(&[
                booking(&user_id, &teacher_id, &course_a, monday, "09:00", "10:00"),
                booking(&user_id, &teacher_id, &course_b, monday, "11:00", "12:00"),
            ])
            .await
            .unwrap();

        let scoped = ctx
            .repos
            .bookings
            .find_on_dates(&teacher_id, Some(&course_a), &[monday])
            .await
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].course_id, course_a);

        let unscoped = ctx
            .repos
            .bookings
            .find_on_dates(&teacher_id, None, &[monday])
            .await
            .unwrap();
        assert_eq!(unscoped.len(), 2);

        let other_day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert!(ctx
            .repos
            .bookings
            .find_on_dates(&teacher_id, None, &[other_day])
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn lists_user_bookings_in_lesson_order_with_pagination() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let teacher_id = ID::new();
        let course_id = ID::new();
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        ctx.repos
            .bookings
            .insert_batch(&[
                booking(&user_id, &teacher_id, &course_id, d2, "09:00", "10:00"),
                booking(&user_id, &teacher_id, &course_id, d1, "14:00", "15:00"),
                booking(&user_id, &teacher_id, &course_id, d1, "09:00", "10:00"),
            ])
            .await
            .unwrap();

        let page = ctx.repos.bookings.find_by_user(&user_id, 0, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].lesson_date, d1);
        assert_eq!(
            page[0].start_time,
            NaiveTime::parse_from_str("09:00", "%H:%M").unwrap()
        );
        assert_eq!(page[1].lesson_date, d1);
        assert_eq!(
            page[1].start_time,
            NaiveTime::parse_from_str("14:00", "%H:%M").unwrap()
        );

        let rest = ctx.repos.bookings.find_by_user(&user_id, 2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].lesson_date, d2);

        assert_eq!(ctx.repos.bookings.count_by_user(&user_id).await.unwrap(), 3);
        assert_eq!(ctx.repos.bookings.count_by_user(&ID::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn range_lookup_is_inclusive_on_both_ends() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let teacher_id = ID::new();
        let course_id = ID::new();

        let dates = [
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        ];
        for date in dates {
            ctx.repos
                .bookings
                .insert_batch(&[booking(
                    &user_id, &teacher_id, &course_id, date, "09:00", "10:00",
                )])
                .await
                .unwrap();
        }

        let found = ctx
            .repos
            .bookings
            .find_by_user_in_range(
                &user_id,
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].lesson_date, dates[0]);
        assert_eq!(found[1].lesson_date, dates[1]);
    }

    #[tokio::test]
    async fn booking_no_lookup_returns_the_whole_batch_for_the_owner_only() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let teacher_id = ID::new();
        let course_id = ID::new();
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let mut batch = vec![
            booking(&user_id, &teacher_id, &course_id, d1, "09:00", "10:00"),
            booking(&user_id, &teacher_id, &course_id, d2, "09:00", "10:00"),
        ];
        let shared_no = batch[0].booking_no.clone();
        batch[1].booking_no = shared_no.clone();
        ctx.repos.bookings.insert_batch(&batch).await.unwrap();

        let found = ctx
            .repos
            .bookings
            .find_by_booking_no(&user_id, shared_no.as_str())
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        assert!(ctx
            .repos
            .bookings
            .find_by_booking_no(&ID::new(), shared_no.as_str())
            .await
            .unwrap()
            .is_empty());
    }
}
