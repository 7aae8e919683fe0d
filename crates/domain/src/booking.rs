use crate::shared::checksum::append_check_digit;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use lingora_utils::create_random_digits;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// 12-digit reference shared by every lesson created from one confirmation
/// request: `YYMMDD` date stamp, five random digits and a check digit
/// (sum of the leading eleven digits mod 10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingNumber(String);

impl BookingNumber {
    pub fn generate(date: NaiveDate) -> Self {
        Self::compose(date, &create_random_digits(5))
    }

    /// Deterministic construction from a date stamp and a 5-digit random part.
    pub fn compose(date: NaiveDate, random_part: &str) -> Self {
        let raw = format!(
            "{:02}{:02}{:02}{}",
            date.year() % 100,
            date.month(),
            date.day(),
            random_part
        );
        Self(append_check_digit(&raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BookingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookingNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Initial state for every materialized booking
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid booking status: {}", s)),
        }
    }
}

/// One reserved lesson occurrence. A confirmation request produces a batch
/// of these sharing a `booking_no`; status transitions happen elsewhere.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: ID,
    pub booking_no: BookingNumber,
    pub teacher_id: ID,
    pub course_id: ID,
    pub user_id: ID,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Meeting links are not backed by any video infrastructure, they are
/// derived from the booking number alone.
pub fn meeting_url(base_url: &str, booking_no: &str) -> String {
    format!("{}/room/{}", base_url.trim_end_matches('/'), booking_no)
}
