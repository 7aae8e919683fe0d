use super::IUserRepo;
use chrono::{DateTime, Utc};
use lingora_domain::{User, UserProfile, UserStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    user_no: String,
    email: String,
    name: String,
    login_id: String,
    password_hash: String,
    country: String,
    language: String,
    status: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.user_uid.into(),
            user_no: raw.user_no,
            email: raw.email,
            name: raw.name,
            login_id: raw.login_id,
            password_hash: raw.password_hash,
            country: raw.country,
            language: raw.language,
            status: raw.status.parse().unwrap_or(UserStatus::Pending),
            created: raw.created,
            updated: raw.updated,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserProfileRaw {
    profile_uid: Uuid,
    user_uid: Uuid,
    nickname: String,
    avatar: String,
    phone: String,
    native_language: String,
    living_country: String,
    updated: DateTime<Utc>,
}

impl From<UserProfileRaw> for UserProfile {
    fn from(raw: UserProfileRaw) -> Self {
        Self {
            id: raw.profile_uid.into(),
            user_id: raw.user_uid.into(),
            nickname: raw.nickname,
            avatar: raw.avatar,
            phone: raw.phone,
            native_language: raw.native_language,
            living_country: raw.living_country,
            updated: raw.updated,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, user_no, email, name, login_id, password_hash, country, language, status, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.user_no)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.login_id)
        .bind(&user.password_hash)
        .bind(&user.country)
        .bind(&user.language)
        .bind(user.status.as_str())
        .bind(user.created)
        .bind(user.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2,
            name = $3,
            login_id = $4,
            password_hash = $5,
            country = $6,
            language = $7,
            status = $8,
            updated = $9
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.login_id)
        .bind(&user.password_hash)
        .bind(&user.country)
        .bind(&user.language)
        .bind(user.status.as_str())
        .bind(user.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|u| u.into())
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|u| u.into())
    }

    async fn find_by_login(&self, login_name: &str) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE email = $1 OR login_id = $1 OR user_no = $1
            "#,
        )
        .bind(login_name)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|u| u.into())
    }

    async fn insert_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles(profile_uid, user_uid, nickname, avatar, phone, native_language, living_country, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(profile.id.inner_ref())
        .bind(profile.user_id.inner_ref())
        .bind(&profile.nickname)
        .bind(&profile.avatar)
        .bind(&profile.phone)
        .bind(&profile.native_language)
        .bind(&profile.living_country)
        .bind(profile.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE user_profiles
            SET nickname = $2,
            avatar = $3,
            phone = $4,
            native_language = $5,
            living_country = $6,
            updated = $7
            WHERE profile_uid = $1
            "#,
        )
        .bind(profile.id.inner_ref())
        .bind(&profile.nickname)
        .bind(&profile.avatar)
        .bind(&profile.phone)
        .bind(&profile.native_language)
        .bind(&profile.living_country)
        .bind(profile.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_profile(&self, user_id: &ID) -> Option<UserProfile> {
        sqlx::query_as::<_, UserProfileRaw>(
            r#"
            SELECT * FROM user_profiles
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|p| p.into())
    }
}
