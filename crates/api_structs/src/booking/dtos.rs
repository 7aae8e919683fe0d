use chrono::{NaiveDate, NaiveTime};
use lingora_domain::{Booking, BookingStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub booking_no: String,
    pub teacher_id: ID,
    pub course_id: ID,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            booking_no: booking.booking_no.to_string(),
            teacher_id: booking.teacher_id,
            course_id: booking.course_id,
            lesson_date: booking.lesson_date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
        }
    }
}

/// Weekly slot as submitted by the booking form, times as `HH:MM` strings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotParams {
    pub week_day: u32,
    pub start_time: String,
    pub end_time: String,
}
