use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A family member a user books lessons on behalf of, e.g. a child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub rel_type: String,
    pub rel_desc: String,
    pub gender: i16,
    pub birthday: Option<NaiveDate>,
    pub personality: String,
    pub character: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl FamilyMember {
    pub fn new(user_id: ID, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name,
            email: String::new(),
            rel_type: String::new(),
            rel_desc: String::new(),
            gender: 0,
            birthday: None,
            personality: String::new(),
            character: String::new(),
            created: now,
            updated: now,
        }
    }
}

impl Entity for FamilyMember {
    fn id(&self) -> &ID {
        &self.id
    }
}
