use super::IMemberRepo;
use crate::repos::shared::inmemory_repo::*;
use lingora_domain::{FamilyMember, ID};
use std::sync::Mutex;

pub struct InMemoryMemberRepo {
    members: Mutex<Vec<FamilyMember>>,
}

impl InMemoryMemberRepo {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for InMemoryMemberRepo {
    async fn insert(&self, member: &FamilyMember) -> anyhow::Result<()> {
        insert(member, &self.members);
        Ok(())
    }

    async fn save(&self, member: &FamilyMember) -> anyhow::Result<()> {
        save(member, &self.members);
        Ok(())
    }

    async fn find(&self, member_id: &ID) -> Option<FamilyMember> {
        find(member_id, &self.members)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<FamilyMember> {
        find_by(&self.members, |m| m.user_id == *user_id)
    }

    async fn delete(&self, member_id: &ID) -> Option<FamilyMember> {
        delete(member_id, &self.members)
    }
}
