use crate::booking::{Booking, BookingNumber, BookingStatus};
use crate::shared::entity::ID;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// One recurring weekly lesson window requested by the caller.
/// Weekday follows ISO numbering, Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotSpec {
    pub weekday: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A calendar date tagged with its ISO weekday number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDate {
    pub date: NaiveDate,
    pub weekday: u32,
}

/// One concrete lesson occurrence produced by expanding a `TimeSlotSpec`
/// over the requested date range. Only lives for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBooking {
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A previously persisted booking, reduced to what the conflict check
/// compares. Callers supply rows already scoped to the teacher (and,
/// depending on `ConflictScope`, the course) of the incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingBooking {
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<&Booking> for ExistingBooking {
    fn from(booking: &Booking) -> Self {
        Self {
            lesson_date: booking.lesson_date,
            start_time: booking.start_time,
            end_time: booking.end_time,
        }
    }
}

/// Which persisted bookings count against a new request. `PerCourse`
/// reproduces the historical behavior where a teacher may be double-booked
/// across different courses; `PerTeacher` blocks the teacher entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictScope {
    PerCourse,
    PerTeacher,
}

impl FromStr for ConflictScope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" => Ok(Self::PerCourse),
            "teacher" => Ok(Self::PerTeacher),
            _ => Err(anyhow::anyhow!("Invalid conflict scope: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("Invalid date: `{0}`, expected format YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error("The start date must not be after the end date")]
    InvalidRange,
    #[error("No requested time slot falls within the date range")]
    EmptyBookingSet,
    #[error("Booking conflict on {date} {start_time} - {end_time}")]
    Conflict {
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    },
}

pub fn parse_date(datestr: &str) -> Result<NaiveDate, SchedulingError> {
    NaiveDate::parse_from_str(datestr, DATE_FORMAT)
        .map_err(|_| SchedulingError::InvalidDateFormat(datestr.to_string()))
}

pub fn parse_time(timestr: &str) -> Result<NaiveTime, SchedulingError> {
    NaiveTime::parse_from_str(timestr, TIME_FORMAT)
        .map_err(|_| SchedulingError::InvalidDateFormat(timestr.to_string()))
}

/// Enumerates every calendar date between `start_date` and `end_date`,
/// both inclusive, in chronological order. `number_from_monday` already
/// gives the ISO weekday, so the Sunday = 0 fixup of other date
/// representations never applies here.
pub fn expand_dates(start_date: &str, end_date: &str) -> Result<Vec<DayDate>, SchedulingError> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    if start > end {
        return Err(SchedulingError::InvalidRange);
    }

    let mut dates = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut cursor = start;
    while cursor <= end {
        dates.push(DayDate {
            date: cursor,
            weekday: cursor.weekday().number_from_monday(),
        });
        cursor += Duration::days(1);
    }
    Ok(dates)
}

/// Emits one candidate per (date, slot) pair whose weekdays agree,
/// preserving date-then-slot-declaration order. An empty cross product is
/// a caller configuration error, not a silent success.
pub fn match_slots(
    dates: &[DayDate],
    slots: &[TimeSlotSpec],
) -> Result<Vec<CandidateBooking>, SchedulingError> {
    let mut candidates = Vec::new();
    for day in dates {
        for slot in slots {
            if slot.weekday == day.weekday {
                candidates.push(CandidateBooking {
                    lesson_date: day.date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                });
            }
        }
    }

    if candidates.is_empty() {
        return Err(SchedulingError::EmptyBookingSet);
    }
    Ok(candidates)
}

/// Half-open overlap on the same calendar date: a candidate conflicts with
/// an existing booking iff `new_start < existing_end && new_end >
/// existing_start`. Back-to-back intervals touch but do not conflict.
/// Short-circuits on the first conflict found.
pub fn check_conflicts(
    candidates: &[CandidateBooking],
    existing: &[ExistingBooking],
) -> Result<(), SchedulingError> {
    for candidate in candidates {
        for booked in existing {
            if candidate.lesson_date != booked.lesson_date {
                continue;
            }
            if candidate.start_time < booked.end_time && candidate.end_time > booked.start_time {
                return Err(SchedulingError::Conflict {
                    date: candidate.lesson_date,
                    start_time: candidate.start_time,
                    end_time: candidate.end_time,
                });
            }
        }
    }
    Ok(())
}

/// Mints the single booking number for the request and stamps every
/// candidate into a pending `Booking`. Invoked at most once per confirmed
/// request; the caller persists the batch atomically.
pub fn materialize(
    candidates: Vec<CandidateBooking>,
    course_id: &ID,
    teacher_id: &ID,
    user_id: &ID,
    now: DateTime<Utc>,
) -> (BookingNumber, Vec<Booking>) {
    let booking_no = BookingNumber::generate(now.date_naive());
    let bookings = candidates
        .into_iter()
        .map(|candidate| Booking {
            id: Default::default(),
            booking_no: booking_no.clone(),
            teacher_id: teacher_id.clone(),
            course_id: course_id.clone(),
            user_id: user_id.clone(),
            lesson_date: candidate.lesson_date,
            start_time: candidate.start_time,
            end_time: candidate.end_time,
            status: BookingStatus::Pending,
            created: now,
            updated: now,
        })
        .collect();

    (booking_no, bookings)
}
