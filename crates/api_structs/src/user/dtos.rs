use lingora_domain::{User, UserProfile, UserStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub user_no: String,
    pub email: String,
    pub name: String,
    pub country: String,
    pub language: String,
    pub status: UserStatus,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            user_no: user.user_no,
            email: user.email,
            name: user.name,
            country: user.country,
            language: user.language,
            status: user.status,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDTO {
    pub user_no: String,
    pub email: String,
    pub name: String,
    pub nickname: String,
    pub avatar: String,
    pub phone: String,
    pub native_language: String,
    pub living_country: String,
}

impl UserProfileDTO {
    pub fn new(user: User, profile: UserProfile) -> Self {
        Self {
            user_no: user.user_no,
            email: user.email,
            name: user.name,
            nickname: profile.nickname,
            avatar: profile.avatar,
            phone: profile.phone,
            native_language: profile.native_language,
            living_country: profile.living_country,
        }
    }
}
