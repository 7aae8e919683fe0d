mod inmemory;
mod postgres;

use lingora_domain::{User, UserProfile, ID};

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    /// Matches against email, login id and user number
    async fn find_by_login(&self, login_name: &str) -> Option<User>;
    async fn insert_profile(&self, profile: &UserProfile) -> anyhow::Result<()>;
    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()>;
    async fn find_profile(&self, user_id: &ID) -> Option<UserProfile>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use chrono::Utc;
    use lingora_domain::{User, UserProfile};

    fn test_user() -> User {
        User::new(
            "student@example.com".into(),
            "Student".into(),
            "correct horse battery staple",
            "NO".into(),
            "nb".into(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn insert_and_find() {
        let ctx = setup_context_inmemory();
        let user = test_user();

        ctx.repos.users.insert(&user).await.expect("To insert user");

        let by_id = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(by_id.email, user.email);
        let by_email = ctx.repos.users.find_by_email(&user.email).await.unwrap();
        assert_eq!(by_email.id, user.id);
        let by_login = ctx.repos.users.find_by_login(&user.user_no).await.unwrap();
        assert_eq!(by_login.id, user.id);
        assert!(ctx.repos.users.find_by_login("nobody").await.is_none());
    }

    #[tokio::test]
    async fn saves_profile_changes() {
        let ctx = setup_context_inmemory();
        let user = test_user();
        ctx.repos.users.insert(&user).await.expect("To insert user");

        let mut profile = UserProfile::new(user.id.clone(), "NO".into(), Utc::now());
        ctx.repos
            .users
            .insert_profile(&profile)
            .await
            .expect("To insert profile");

        profile.nickname = "Sam".into();
        ctx.repos
            .users
            .save_profile(&profile)
            .await
            .expect("To save profile");

        let found = ctx.repos.users.find_profile(&user.id).await.unwrap();
        assert_eq!(found.nickname, "Sam");
    }
}
