use lingora_domain::{Booking, BookingNumber, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::{BookingDTO, TimeSlotParams};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub bookings: Vec<BookingDTO>,
}

impl BookingListResponse {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: bookings.into_iter().map(BookingDTO::new).collect(),
        }
    }
}

pub mod confirm_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub course_id: ID,
        pub teacher_id: ID,
        /// `YYYY-MM-DD`
        pub start_date: String,
        /// `YYYY-MM-DD`
        pub end_date: String,
        pub time_slots: Vec<TimeSlotParams>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub booking_no: String,
        pub bookings: Vec<BookingDTO>,
    }

    impl APIResponse {
        pub fn new(booking_no: BookingNumber, bookings: Vec<Booking>) -> Self {
            Self {
                booking_no: booking_no.to_string(),
                bookings: bookings.into_iter().map(BookingDTO::new).collect(),
            }
        }
    }
}

pub mod list_bookings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        /// 1-based page number
        #[serde(default)]
        pub pn: Option<i64>,
        /// Page size
        #[serde(default)]
        pub ps: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub bookings: Vec<BookingDTO>,
        pub pn: i64,
        pub ps: i64,
        pub total: i64,
    }

    impl APIResponse {
        pub fn new(bookings: Vec<Booking>, pn: i64, ps: i64, total: i64) -> Self {
            Self {
                bookings: bookings.into_iter().map(BookingDTO::new).collect(),
                pn,
                ps,
                total,
            }
        }
    }
}

pub mod get_bookings_in_range {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// `YYYY-MM-DD`
        pub start_date: String,
        /// `YYYY-MM-DD`
        pub end_date: String,
    }

    pub type APIResponse = BookingListResponse;
}

pub mod get_meeting_info {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_no: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub booking_no: String,
        pub meeting_url: String,
        pub bookings: Vec<BookingDTO>,
    }
}
