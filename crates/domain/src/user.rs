use crate::shared::checksum::append_check_digit;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use lingora_utils::create_random_digits;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Public account reference handed to users: `YYMM` stamp, five random
/// digits and a trailing check digit (digit sum mod 10).
pub fn generate_user_no(date: NaiveDate) -> String {
    let raw = format!(
        "{:02}{:02}{}",
        date.year() % 100,
        date.month(),
        create_random_digits(5)
    );
    append_check_digit(&raw)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Registered, e-mail not verified yet
    Pending,
    Active,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

impl FromStr for UserStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            _ => Err(anyhow::anyhow!("Invalid user status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub user_no: String,
    pub email: String,
    pub name: String,
    pub login_id: String,
    pub password_hash: String,
    pub country: String,
    pub language: String,
    pub status: UserStatus,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        name: String,
        password: &str,
        country: String,
        language: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_no: generate_user_no(now.date_naive()),
            email,
            name,
            login_id: String::new(),
            password_hash: Self::hash_password(password),
            country,
            language,
            status: UserStatus::Pending,
            created: now,
            updated: now,
        }
    }

    pub fn hash_password(password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());
        format!("{:x}", digest)
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash == Self::hash_password(password)
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: ID,
    pub user_id: ID,
    pub nickname: String,
    pub avatar: String,
    pub phone: String,
    pub native_language: String,
    pub living_country: String,
    pub updated: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: ID, living_country: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            nickname: String::new(),
            avatar: String::new(),
            phone: String::new(),
            native_language: String::new(),
            living_country,
            updated: now,
        }
    }
}

impl Entity for UserProfile {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::checksum::check_digit;

    #[test]
    fn user_no_has_stamp_and_check_digit() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let user_no = generate_user_no(date);
        assert_eq!(user_no.len(), 10);
        assert!(user_no.starts_with("2503"));
        let (raw, check) = user_no.split_at(9);
        assert_eq!(check.parse::<u32>().unwrap(), check_digit(raw));
    }

    #[test]
    fn verifies_hashed_password() {
        let user = User::new(
            "student@example.com".into(),
            "Student".into(),
            "hunter2hunter2",
            "NO".into(),
            "nb".into(),
            Utc::now(),
        );
        assert_ne!(user.password_hash, "hunter2hunter2");
        assert!(user.verify_password("hunter2hunter2"));
        assert!(!user.verify_password("hunter3hunter3"));
    }
}
