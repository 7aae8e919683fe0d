use lingora_domain::{User, UserProfile};
use serde::{Deserialize, Serialize};

use crate::dtos::UserProfileDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub profile: UserProfileDTO,
}

impl UserProfileResponse {
    pub fn new(user: User, profile: UserProfile) -> Self {
        Self {
            profile: UserProfileDTO::new(user, profile),
        }
    }
}

pub mod register_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
        pub password: String,
        pub name: String,
        /// ISO alpha-2 code, validated against the country dictionary
        pub country: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user_no: String,
    }
}

pub mod login_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub login_name: String,
        pub password: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user_no: String,
        pub email: String,
        pub name: String,
        pub token: String,
    }
}

pub mod get_profile {
    use super::*;

    pub type APIResponse = UserProfileResponse;
}

pub mod update_profile {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub nickname: Option<String>,
        #[serde(default)]
        pub avatar: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub native_language: Option<String>,
        #[serde(default)]
        pub living_country: Option<String>,
    }

    pub type APIResponse = UserProfileResponse;
}
