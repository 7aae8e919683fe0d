use super::IMemberRepo;
use chrono::{DateTime, NaiveDate, Utc};
use lingora_domain::{FamilyMember, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRaw {
    member_uid: Uuid,
    user_uid: Uuid,
    name: String,
    email: String,
    rel_type: String,
    rel_desc: String,
    gender: i16,
    birthday: Option<NaiveDate>,
    personality: String,
    character: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<MemberRaw> for FamilyMember {
    fn from(raw: MemberRaw) -> Self {
        Self {
            id: raw.member_uid.into(),
            user_id: raw.user_uid.into(),
            name: raw.name,
            email: raw.email,
            rel_type: raw.rel_type,
            rel_desc: raw.rel_desc,
            gender: raw.gender,
            birthday: raw.birthday,
            personality: raw.personality,
            character: raw.character,
            created: raw.created,
            updated: raw.updated,
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for PostgresMemberRepo {
    async fn insert(&self, member: &FamilyMember) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO family_members(member_uid, user_uid, name, email, rel_type, rel_desc, gender, birthday, personality, character, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(member.id.inner_ref())
        .bind(member.user_id.inner_ref())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.rel_type)
        .bind(&member.rel_desc)
        .bind(member.gender)
        .bind(member.birthday)
        .bind(&member.personality)
        .bind(&member.character)
        .bind(member.created)
        .bind(member.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, member: &FamilyMember) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE family_members
            SET name = $2,
            email = $3,
            rel_type = $4,
            rel_desc = $5,
            gender = $6,
            birthday = $7,
            personality = $8,
            character = $9,
            updated = $10
            WHERE member_uid = $1
            "#,
        )
        .bind(member.id.inner_ref())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.rel_type)
        .bind(&member.rel_desc)
        .bind(member.gender)
        .bind(member.birthday)
        .bind(&member.personality)
        .bind(&member.character)
        .bind(member.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, member_id: &ID) -> Option<FamilyMember> {
        sqlx::query_as::<_, MemberRaw>(
            r#"
            SELECT * FROM family_members
            WHERE member_uid = $1
            "#,
        )
        .bind(member_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|m| m.into())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<FamilyMember> {
        sqlx::query_as::<_, MemberRaw>(
            r#"
            SELECT * FROM family_members
            WHERE user_uid = $1
            ORDER BY created ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|m| m.into())
        .collect()
    }

    async fn delete(&self, member_id: &ID) -> Option<FamilyMember> {
        sqlx::query_as::<_, MemberRaw>(
            r#"
            DELETE FROM family_members
            WHERE member_uid = $1
            RETURNING *
            "#,
        )
        .bind(member_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|m| m.into())
    }
}
