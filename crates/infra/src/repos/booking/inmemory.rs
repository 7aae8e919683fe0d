use super::IBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use lingora_domain::{Booking, BookingStatus, ID};
use std::sync::Mutex;

pub struct InMemoryBookingRepo {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
        }
    }
}

fn sort_by_lesson(bookings: &mut Vec<Booking>) {
    bookings.sort_by(|a, b| {
        a.lesson_date
            .cmp(&b.lesson_date)
            .then(a.start_time.cmp(&b.start_time))
    });
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert_batch(&self, bookings: &[Booking]) -> anyhow::Result<()> {
        for booking in bookings {
            insert(booking, &self.bookings);
        }
        Ok(())
    }

    async fn find_on_dates(
        &self,
        teacher_id: &ID,
        course_id: Option<&ID>,
        dates: &[NaiveDate],
    ) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| {
            &b.teacher_id == teacher_id
                && course_id.map(|c| &b.course_id == c).unwrap_or(true)
                && dates.contains(&b.lesson_date)
                && b.status != BookingStatus::Cancelled
        }))
    }

    async fn find_by_user(
        &self,
        user_id: &ID,
        skip: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |b| &b.user_id == user_id);
        sort_by_lesson(&mut bookings);
        Ok(bookings
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_user(&self, user_id: &ID) -> anyhow::Result<i64> {
        Ok(find_by(&self.bookings, |b| &b.user_id == user_id).len() as i64)
    }

    async fn find_by_user_in_range(
        &self,
        user_id: &ID,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |b| {
            &b.user_id == user_id && b.lesson_date >= start && b.lesson_date <= end
        });
        sort_by_lesson(&mut bookings);
        Ok(bookings)
    }

    async fn find_by_booking_no(
        &self,
        user_id: &ID,
        booking_no: &str,
    ) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |b| {
            &b.user_id == user_id && b.booking_no.as_str() == booking_no
        });
        sort_by_lesson(&mut bookings);
        Ok(bookings)
    }
}
