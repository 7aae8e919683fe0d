use chrono::NaiveDate;
use lingora_domain::{FamilyMember, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub rel_type: String,
    pub rel_desc: String,
    pub gender: i16,
    pub birthday: Option<NaiveDate>,
    pub personality: String,
    pub character: String,
}

impl FamilyMemberDTO {
    pub fn new(member: FamilyMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            rel_type: member.rel_type,
            rel_desc: member.rel_desc,
            gender: member.gender,
            birthday: member.birthday,
            personality: member.personality,
            character: member.character,
        }
    }
}
