use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for CourseStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(anyhow::anyhow!("Invalid course status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: ID,
    pub name: String,
    pub introduction: String,
    pub detail: String,
    pub language: String,
    pub level: i32,
    pub cost_price: Decimal,
    pub display_price: Decimal,
    pub goal: String,
    /// Lesson length in minutes
    pub duration: i32,
    pub session_number: i32,
    pub status: CourseStatus,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Course {
    pub fn new(name: String, language: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            introduction: String::new(),
            detail: String::new(),
            language,
            level: 1,
            cost_price: Decimal::ZERO,
            display_price: Decimal::ZERO,
            goal: String::new(),
            duration: 60,
            session_number: 1,
            status: CourseStatus::Published,
            created: now,
            updated: now,
        }
    }
}

impl Entity for Course {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct Teacher {
    pub id: ID,
    pub name: String,
    pub introduction: String,
    pub detail: String,
    pub first_language: String,
    pub nationality: String,
    pub living_country: String,
    pub phone: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Teacher {
    pub fn new(name: String, first_language: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            introduction: String::new(),
            detail: String::new(),
            first_language,
            nationality: String::new(),
            living_country: String::new(),
            phone: String::new(),
            created: now,
            updated: now,
        }
    }
}

impl Entity for Teacher {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// One weekly recurring availability window on a teacher's template.
/// Weekday follows ISO numbering, Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: ID,
    pub teacher_id: ID,
    pub weekday: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub enabled: bool,
    pub updated: DateTime<Utc>,
}

impl Entity for AvailabilitySlot {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Applied,
    Active,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Active => "active",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(Self::Applied),
            "active" => Ok(Self::Active),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid enrollment status: {}", s)),
        }
    }
}

/// A user's membership of a course, created by the join flow.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: ID,
    pub user_id: ID,
    pub course_id: ID,
    pub status: EnrollmentStatus,
    pub created: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(user_id: ID, course_id: ID, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            course_id,
            status: EnrollmentStatus::Applied,
            created: now,
        }
    }
}

impl Entity for Enrollment {
    fn id(&self) -> &ID {
        &self.id
    }
}
