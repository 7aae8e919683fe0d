use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use lingora_domain::{User, UserProfile, ID};
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    profiles: Mutex<Vec<UserProfile>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            profiles: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        save(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        find_by(&self.users, |u| u.email == email).into_iter().next()
    }

    async fn find_by_login(&self, login_name: &str) -> Option<User> {
        find_by(&self.users, |u| {
            u.email == login_name || u.login_id == login_name || u.user_no == login_name
        })
        .into_iter()
        .next()
    }

    async fn insert_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        insert(profile, &self.profiles);
        Ok(())
    }

    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        save(profile, &self.profiles);
        Ok(())
    }

    async fn find_profile(&self, user_id: &ID) -> Option<UserProfile> {
        find_by(&self.profiles, |p| p.user_id == *user_id)
            .into_iter()
            .next()
    }
}
