use lingora_domain::{FamilyMember, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::FamilyMemberDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberResponse {
    pub member: FamilyMemberDTO,
}

impl FamilyMemberResponse {
    pub fn new(member: FamilyMember) -> Self {
        Self {
            member: FamilyMemberDTO::new(member),
        }
    }
}

pub mod add_member {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// When present, updates the member instead of creating one
        #[serde(default)]
        pub id: Option<ID>,
        pub name: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub rel_type: Option<String>,
        #[serde(default)]
        pub rel_desc: Option<String>,
        #[serde(default)]
        pub gender: Option<i16>,
        /// `YYYY-MM-DD`
        #[serde(default)]
        pub birthday: Option<String>,
        #[serde(default)]
        pub personality: Option<String>,
        #[serde(default)]
        pub character: Option<String>,
    }

    pub type APIResponse = FamilyMemberResponse;
}

pub mod list_members {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub members: Vec<FamilyMemberDTO>,
    }

    impl APIResponse {
        pub fn new(members: Vec<FamilyMember>) -> Self {
            Self {
                members: members.into_iter().map(FamilyMemberDTO::new).collect(),
            }
        }
    }
}

pub mod remove_member {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub member_id: ID,
    }

    pub type APIResponse = FamilyMemberResponse;
}
